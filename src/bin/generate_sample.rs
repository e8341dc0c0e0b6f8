use anyhow::{Context, Result};

const PLATFORMS: [&str; 8] = ["Wii", "NES", "GB", "DS", "X360", "PS3", "PS2", "PC"];
const GENRES: [&str; 8] = [
    "Sports",
    "Platform",
    "Racing",
    "Role-Playing",
    "Puzzle",
    "Shooter",
    "Action",
    "Simulation",
];
const PUBLISHERS: [&str; 5] = [
    "Nintendo",
    "Electronic Arts",
    "Activision",
    "Sony Computer Entertainment",
    "Take-Two Interactive",
];

/// Regional appetite per genre: (NA, EU, JP, Other) weights.
fn regional_weights(genre: &str) -> [f64; 4] {
    match genre {
        "Role-Playing" => [0.30, 0.20, 0.45, 0.05],
        "Puzzle" => [0.35, 0.25, 0.32, 0.08],
        "Shooter" => [0.55, 0.32, 0.03, 0.10],
        "Sports" => [0.50, 0.33, 0.07, 0.10],
        _ => [0.48, 0.30, 0.12, 0.10],
    }
}

/// Deterministic splitmix64 generator; sample files must be reproducible.
struct SplitMix(u64);

impl SplitMix {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "videogames_wide.csv".to_string());
    let mut rng = SplitMix(42);

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record([
        "Rank",
        "Name",
        "Platform",
        "Year",
        "Genre",
        "Publisher",
        "NA_Sales",
        "EU_Sales",
        "JP_Sales",
        "Other_Sales",
        "Global_Sales",
    ])?;

    let n_games = 500;
    for rank in 1..=n_games {
        let platform = rng.pick(&PLATFORMS);
        let genre = rng.pick(&GENRES);
        let publisher = rng.pick(&PUBLISHERS);
        // roughly one title in fifty has no release year, as in the public dataset
        let year = if rng.next_f64() < 0.02 {
            "N/A".to_string()
        } else {
            (1985 + rng.next_u64() % 31).to_string()
        };

        // heavy tail: a few blockbusters, mostly small sellers
        let global = 0.01 + 40.0 * rng.next_f64().powi(12);
        let regional: Vec<f64> = regional_weights(genre)
            .iter()
            .map(|w| (global * w * (0.8 + 0.4 * rng.next_f64()) * 100.0).round() / 100.0)
            .collect();
        let total: f64 = regional.iter().sum();

        let mut row = vec![
            rank.to_string(),
            format!("{genre} Game {rank}"),
            platform.to_string(),
            year,
            genre.to_string(),
            publisher.to_string(),
        ];
        row.extend(regional.iter().map(|v| format!("{v:.2}")));
        row.push(format!("{total:.2}"));
        writer.write_record(&row)?;
    }
    writer.flush()?;

    println!("Wrote {n_games} games to {output_path}");
    Ok(())
}
