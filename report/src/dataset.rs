use anyhow::{bail, ensure, Context, Result};
use topsis::{Alternative, Criterion, Direction};

#[derive(Debug)]
pub struct Dataset {
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
}

/// Four candidate projects judged on profit, duration, risk, and strategic importance.
pub fn projects() -> Dataset {
    let criteria = vec![
        Criterion::new("C1", "Expected profit", 0.4, Direction::Benefit),
        Criterion::new("C2", "Project duration", 0.2, Direction::Cost),
        Criterion::new("C3", "Risk level", 0.2, Direction::Cost),
        Criterion::new("C4", "Strategic importance", 0.2, Direction::Benefit),
    ];
    let alternatives = [
        ("Project A", [120.0, 10.0, 6.0, 8.0]),
        ("Project B", [90.0, 7.0, 4.0, 6.0]),
        ("Project C", [150.0, 14.0, 8.0, 9.0]),
        ("Project D", [80.0, 6.0, 3.0, 5.0]),
    ]
    .into_iter()
    .map(|(name, values)| {
        Alternative::with_values(name, criteria.iter().map(|c| c.id.clone()).zip(values))
    })
    .collect();
    Dataset {
        criteria,
        alternatives,
    }
}

/// Parse a decision matrix from CSV.
///
/// ```text
/// name,C1,C2
/// @name,Expected profit,Risk level
/// @weight,0.6,0.4
/// @direction,benefit,cost
/// Project A,120,6
/// ```
///
/// The header lists criterion ids. The `@name` row is optional and defaults display names to the
/// ids; `@weight` and `@direction` are required. Blank lines and lines starting with `#` are
/// skipped.
pub fn parse_csv(input: &str) -> Result<Dataset> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (_, header) = lines.next().context("missing header row")?;
    let header: Vec<&str> = header.split(',').map(str::trim).collect();
    ensure!(
        header.len() >= 2 && header[0].eq_ignore_ascii_case("name"),
        "header must be \"name\" followed by criterion ids"
    );
    let ids = &header[1..];

    let mut names: Option<Vec<String>> = None;
    let mut weights: Option<Vec<f64>> = None;
    let mut directions: Option<Vec<Direction>> = None;
    let mut alternatives = Vec::new();
    for (line_number, line) in lines {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        ensure!(
            fields.len() == header.len(),
            "line {line_number}: expected {} fields, found {}",
            header.len(),
            fields.len()
        );
        let (label, cells) = (fields[0], &fields[1..]);
        match label {
            "@name" => names = Some(cells.iter().map(|s| s.to_string()).collect()),
            "@weight" => {
                let parsed = cells
                    .iter()
                    .map(|cell| cell.parse::<f64>())
                    .collect::<Result<Vec<_>, _>>()
                    .with_context(|| format!("line {line_number}: invalid weight"))?;
                weights = Some(parsed);
            }
            "@direction" => {
                let parsed = cells
                    .iter()
                    .map(|cell| cell.parse::<Direction>())
                    .collect::<Result<Vec<_>, _>>()
                    .with_context(|| format!("line {line_number}: invalid direction"))?;
                directions = Some(parsed);
            }
            label if label.starts_with('@') => bail!("line {line_number}: unknown row {label:?}"),
            name => {
                let values = cells
                    .iter()
                    .map(|cell| cell.parse::<f64>())
                    .collect::<Result<Vec<_>, _>>()
                    .with_context(|| format!("line {line_number}: invalid value for {name:?}"))?;
                alternatives.push(Alternative::with_values(
                    name,
                    ids.iter().map(|id| id.to_string()).zip(values),
                ));
            }
        }
    }

    let weights = weights.context("missing @weight row")?;
    let directions = directions.context("missing @direction row")?;
    let names = names.unwrap_or_else(|| ids.iter().map(|id| id.to_string()).collect());
    let criteria = ids
        .iter()
        .zip(names)
        .zip(weights.into_iter().zip(directions))
        .map(|((id, name), (weight, direction))| Criterion::new(*id, name, weight, direction))
        .collect();
    Ok(Dataset {
        criteria,
        alternatives,
    })
}
