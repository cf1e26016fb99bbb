use contracts::usecases::u001_generate_table::GenerateResponse;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

use super::params::GenerateParams;

pub const COLUMNS: [&str; 5] = ["id", "age", "income", "category", "score"];

const CATEGORIES: [&str; 3] = ["A", "B", "C"];

/// Диапазоны распределений для конкретной модели
#[derive(Debug, Clone, Copy, PartialEq)]
struct Profile {
    age_base: i64,
    age_spread: i64,
    income_base: i64,
    income_spread: i64,
}

impl Profile {
    fn for_model(model: &str) -> Self {
        if model == "gan" {
            Self {
                age_base: 25,
                age_spread: 40,
                income_base: 30_000,
                income_spread: 90_000,
            }
        } else {
            Self {
                age_base: 22,
                age_spread: 45,
                income_base: 28_000,
                income_spread: 85_000,
            }
        }
    }
}

/// Build a synthetic table.
///
/// The PRNG is re-seeded on every call, so identical params always produce
/// the identical table.
pub fn generate_table(params: &GenerateParams, seed: u64) -> GenerateResponse {
    let mut rng = StdRng::seed_from_u64(seed);
    let profile = Profile::for_model(&params.model);

    let rows = (0..params.rows)
        .map(|i| synth_row(&mut rng, &profile, i))
        .collect();

    GenerateResponse {
        columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows,
    }
}

fn synth_row(rng: &mut StdRng, profile: &Profile, index: u32) -> Vec<Value> {
    let id = format!("r{:02}", index + 1);
    let age = profile.age_base + rng.gen_range(0..=profile.age_spread);
    let income = profile.income_base + rng.gen_range(0..=profile.income_spread);
    let category = CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
    let score = format!("{:.2}", rng.gen::<f64>() * 100.0);

    vec![
        json!(id),
        json!(age),
        json!(income),
        json!(category),
        json!(score),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(model: &str, rows: u32) -> GenerateParams {
        GenerateParams {
            model: model.to_string(),
            rows,
        }
    }

    #[test]
    fn test_shape() {
        let table = generate_table(&params("gan", 12), 42);
        assert_eq!(table.columns, COLUMNS);
        assert_eq!(table.rows.len(), 12);
        assert!(table.rows.iter().all(|r| r.len() == COLUMNS.len()));
        assert_eq!(table.rows[0][0], json!("r01"));
        assert_eq!(table.rows[11][0], json!("r12"));
    }

    #[test]
    fn test_same_seed_same_table() {
        let a = generate_table(&params("vae", 30), 42);
        let b = generate_table(&params("vae", 30), 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_gan_ranges() {
        let table = generate_table(&params("gan", 200), 7);
        for row in &table.rows {
            let age = row[1].as_i64().unwrap();
            let income = row[2].as_i64().unwrap();
            assert!((25..=65).contains(&age), "age {age}");
            assert!((30_000..=120_000).contains(&income), "income {income}");
        }
    }

    #[test]
    fn test_other_model_ranges() {
        let table = generate_table(&params("vae", 200), 7);
        for row in &table.rows {
            let age = row[1].as_i64().unwrap();
            let income = row[2].as_i64().unwrap();
            assert!((22..=67).contains(&age), "age {age}");
            assert!((28_000..=113_000).contains(&income), "income {income}");
        }
    }

    #[test]
    fn test_category_and_score_format() {
        let table = generate_table(&params("gan", 50), 1);
        for row in &table.rows {
            let category = row[3].as_str().unwrap();
            assert!(CATEGORIES.contains(&category));

            let score = row[4].as_str().unwrap();
            let (_, frac) = score.split_once('.').unwrap();
            assert_eq!(frac.len(), 2);
            let value: f64 = score.parse().unwrap();
            assert!((0.0..=100.0).contains(&value));
        }
    }
}
