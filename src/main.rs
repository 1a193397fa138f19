#![deny(clippy::all)]
use anyhow::Result;
use booru_philomena::prelude::*;
use clap::Parser;
use colored::Colorize;

use crate::cli::Cli;

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    env_logger::builder().format_timestamp(None).init();

    let config = args.load_config()?;
    let source = PhilomenaExtractor::new(config)?;

    let tags = source.tokenize(&args.query);
    let query = Query::new(tags, args.count);

    let Some(results) = source.get(&query).await? else {
        println!("{}", "No images found".bold().yellow());
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(source.label(), &results);
    }

    Ok(())
}

fn print_results(label: &str, results: &[ImageResult]) {
    println!(
        "{} {} {}\n----------------",
        results.len().to_string().bold().blue(),
        "images from".bold(),
        label.bold().green()
    );

    for image in results {
        let nsfw = match image.nsfw {
            NsfwLevel::Safe => image.nsfw.to_string().green(),
            NsfwLevel::Suggestive => image.nsfw.to_string().yellow(),
            NsfwLevel::Guro => image.nsfw.to_string().red(),
        };

        println!(
            "{}\n - {} {}\n - {} {}\n - {} {}\n - {} {}\n",
            image.title.bold(),
            "Author:".bold().blue(),
            image.author,
            "Rating:".bold().blue(),
            nsfw.bold(),
            "Page:".bold().blue(),
            image.page_url.purple().underline(),
            "Image:".bold().blue(),
            image.urls.original.purple().underline(),
        );
    }
}
