//! chapterize CLI - structure recovery for layout-only PDF books.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use chapterize::{
    parse_page, write_chapters, BoundingBox, ClassifyOptions, DocumentSource, Error,
    ExtractOptions, JsonSource,
};

#[derive(Parser)]
#[command(name = "chapterize")]
#[command(version)]
#[command(about = "Convert a PDF word dump into per-chapter HTML", long_about = None)]
struct Cli {
    /// Input word dump (JSON from the extraction service)
    #[arg(value_name = "DUMP")]
    input: PathBuf,

    /// Output directory for chapter HTML files
    #[arg(short, long, value_name = "DIR", default_value = "out")]
    output: PathBuf,

    /// Pages to process, e.g. "0-49" or "3,7,12" (default: all)
    #[arg(short, long, value_name = "PAGES")]
    pages: Option<String>,

    /// Language attribute for the emitted HTML
    #[arg(long, default_value = "es")]
    lang: String,

    /// Crop every page to this content box: "x0,top,x1,bottom"
    #[arg(long, value_name = "BOX")]
    content_box: Option<String>,

    /// Left indent treated as a displaced column (wide-margin threshold)
    #[arg(long, default_value_t = 120)]
    wide_margin: i32,

    /// Also write the classified model as JSON next to the chapters
    #[arg(long)]
    dump_model: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let source = JsonSource::from_path(&cli.input)?;

    let indices = match &cli.pages {
        Some(spec) => parse_pages(spec)?,
        None => (0..source.page_count()).collect(),
    };

    let mut options = ExtractOptions::new()
        .with_lang(cli.lang.as_str())
        .with_classify(ClassifyOptions::new().with_wide_margin(cli.wide_margin));
    if let Some(spec) = &cli.content_box {
        options = options.with_content_box(parse_box(spec)?);
    }

    let bar = ProgressBar::new(indices.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} pages")?.progress_chars("=> "),
    );

    let mut documents = Vec::with_capacity(indices.len());
    for index in &indices {
        let view = source.page(*index)?;
        debug!("processing page {:03}", index);
        documents.push(parse_page(&view, &options));
        bar.inc(1);
    }
    bar.finish_and_clear();

    let written = write_chapters(&cli.output, &documents, &options.lang)?;

    if cli.dump_model {
        let model_path = cli.output.join("model.json");
        std::fs::write(&model_path, serde_json::to_string_pretty(&documents)?)?;
        println!("  {} {}", "model".cyan(), model_path.display());
    }

    for path in &written {
        println!("  {} {}", "chapter".green(), path.display());
    }
    println!(
        "{} {} pages -> {} chapters",
        "done:".green().bold(),
        indices.len(),
        written.len()
    );
    Ok(())
}

/// Parse a page selection like "0-49", "3,7,12" or "0-4,9".
fn parse_pages(spec: &str) -> chapterize::Result<Vec<usize>> {
    let mut pages = Vec::new();
    for part in spec.split(',') {
        let part = part.trim();
        let invalid = || Error::InvalidPageRange(part.to_string());
        match part.split_once('-') {
            Some((start, end)) => {
                let start: usize = start.trim().parse().map_err(|_| invalid())?;
                let end: usize = end.trim().parse().map_err(|_| invalid())?;
                if end < start {
                    return Err(invalid());
                }
                pages.extend(start..=end);
            }
            None => pages.push(part.parse().map_err(|_| invalid())?),
        }
    }
    Ok(pages)
}

/// Parse a content box like "85,132,520,645".
fn parse_box(spec: &str) -> Result<BoundingBox, String> {
    let edges: Vec<i32> = spec
        .split(',')
        .map(|p| p.trim().parse().map_err(|_| format!("invalid content box: {spec}")))
        .collect::<Result<_, _>>()?;
    match edges[..] {
        [x0, top, x1, bottom] => Ok(BoundingBox::new(x0, top, x1, bottom)),
        _ => Err(format!("invalid content box: {spec}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pages_ranges_and_singles() {
        assert_eq!(parse_pages("0-3").unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(parse_pages("3,7,12").unwrap(), vec![3, 7, 12]);
        assert_eq!(parse_pages("0-2,9").unwrap(), vec![0, 1, 2, 9]);
        assert!(parse_pages("5-2").is_err());
        assert!(parse_pages("x").is_err());
    }

    #[test]
    fn test_parse_box() {
        let bounds = parse_box("85, 132, 520, 645").unwrap();
        assert_eq!(bounds, BoundingBox::new(85, 132, 520, 645));
        assert!(parse_box("1,2,3").is_err());
        assert!(parse_box("a,b,c,d").is_err());
    }
}
