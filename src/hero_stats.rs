// dotabuff heroes page, the table is already ranked by matches played

use scraper::{ElementRef, Html, Selector};

use crate::{
    dota2::{Player, UserHeroPerformance},
    error::ApiError,
};

fn selector(css: &str) -> Result<Selector, ApiError> {
    Selector::parse(css)
        .map_err(|err| ApiError::Generic(format!("bad selector {}: {}", css, err)))
}

pub fn parse_hero_table(
    body: &str,
    player: &Player,
    n: usize,
) -> Result<Vec<UserHeroPerformance>, ApiError> {
    let document = Html::parse_document(body);
    let table_selector = selector("table")?;
    let row_selector = selector("tbody tr")?;
    let cell_selector = selector("td")?;
    let anchor_selector = selector("a")?;

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| ApiError::Generic("hero statistics table not found".to_string()))?;

    table
        .select(&row_selector)
        .take(n)
        .map(|row| parse_row(row, player, &cell_selector, &anchor_selector))
        .collect()
}

fn parse_row(
    row: ElementRef,
    player: &Player,
    cell_selector: &Selector,
    anchor_selector: &Selector,
) -> Result<UserHeroPerformance, ApiError> {
    let hero_name = row
        .select(anchor_selector)
        .map(|anchor| anchor.text().collect::<String>().trim().to_string())
        .find(|text| !text.is_empty())
        .ok_or_else(|| ApiError::Generic("hero name missing in statistics row".to_string()))?;

    // the name cell carries a data-value too, so only numeric ones count
    let mut values = row
        .select(cell_selector)
        .filter_map(|cell| cell.value().attr("data-value"))
        .filter_map(|value| value.trim().parse::<f64>().ok());

    let matches_played = values
        .next()
        .filter(|matches| *matches >= 0.0 && matches.fract() == 0.0)
        .ok_or_else(|| ApiError::Generic(format!("matches played missing for {}", hero_name)))?
        as u32;
    let win_rate = values
        .next()
        .ok_or_else(|| ApiError::Generic(format!("win rate missing for {}", hero_name)))?;

    Ok(UserHeroPerformance {
        player: player.clone(),
        hero_name,
        matches_played,
        win_rate,
    })
}
