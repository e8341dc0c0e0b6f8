use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

pub const HEADER: &str =
    "Rank,Name,Platform,Year,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales";

/// A handful of rows in the layout of the public vgsales dataset,
/// including a missing year and a blank publisher.
pub const ROWS: &[&str] = &[
    "1,Wii Sports,Wii,2006,Sports,Nintendo,41.49,29.02,3.77,8.46,82.74",
    "2,Super Mario Bros.,NES,1985,Platform,Nintendo,29.08,3.58,6.81,0.77,40.24",
    "3,Mario Kart Wii,Wii,2008,Racing,Nintendo,15.85,12.88,3.79,3.31,35.82",
    "4,Pokemon Red/Pokemon Blue,GB,1996,Role-Playing,Nintendo,11.27,8.89,10.22,1,31.37",
    "5,Tetris,GB,1989,Puzzle,Nintendo,23.2,2.26,4.22,0.58,30.26",
    "6,Call of Duty: Black Ops,X360,2010,Shooter,Activision,9.67,3.73,0.11,1.13,14.64",
    "7,Grand Theft Auto: San Andreas,PS2,2004,Action,Take-Two Interactive,\
     9.43,0.4,0.41,10.57,20.81",
    "8,Madden NFL 2004,PS2,N/A,Sports,,4.26,0.26,0.01,0.71,5.23",
];

pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

pub fn sample_csv(dir: &TempDir) -> PathBuf {
    let mut text = String::from(HEADER);
    for row in ROWS {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    write_file(dir, "videogames_wide.csv", &text)
}

/// Global_Sales of every fixture row.
pub fn global_sales_total() -> f64 {
    ROWS.iter()
        .map(|r| r.rsplit(',').next().unwrap().parse::<f64>().unwrap())
        .sum()
}
