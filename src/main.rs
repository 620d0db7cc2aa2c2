//! guitar-book: render chord-annotated song lyrics into pages.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, ValueEnum};
use guitar_book::config::Config;
use guitar_book::render::{self, html, sheet, RenderedPage};
use guitar_book::site::{self, Site, AUTHORS_PATH, FAVOURITES_PATH, NEWEST_PATH, SONGS_PATH};
use guitar_book::{input, Result};
use serde::Serialize;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::process::ExitCode;

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Display nodes and site navigation as JSON
    Json,
    /// Standalone HTML documents
    Html,
    /// Plain-text chord sheets
    Sheet,
}

#[derive(Parser)]
#[command(name = "guitar-book")]
#[command(about = "Render song lyrics with chords into browsable pages", long_about = None)]
struct Args {
    /// Files or directories to render
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Write one file per page into this directory instead of stdout
    #[arg(long, short = 'o', value_name = "DIR")]
    out: Option<PathBuf>,

    /// Configuration file (defaults to ./guitar-book.toml)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    site: &'a Site,
    pages: &'a [RenderedPage],
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut cfg = args
        .config
        .as_deref()
        .map_or_else(Config::load, Config::load_from);

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }

    let documents = input::find_documents(args.paths, &cfg.file_extensions)?;
    if documents.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    let mut entries = Vec::new();
    for doc in &documents {
        match input::load_entry(doc) {
            Ok(entry) => entries.push(entry),
            Err(e) => log::warn!("skipping {}: {e}", doc.display()),
        }
    }
    if entries.is_empty() {
        eprintln!("No songs or pages could be loaded");
        return Ok(());
    }
    let entries = site::unique_paths(entries);

    let site = Site::build(&entries, &cfg);
    let pages: Vec<RenderedPage> = entries
        .iter()
        .map(|entry| render::render_page(entry, &cfg))
        .collect();

    match (args.format, args.out) {
        (OutputFormat::Json, None) => {
            let json = serde_json::to_string_pretty(&JsonOutput {
                site: &site,
                pages: &pages,
            })?;
            println!("{json}");
        }
        (OutputFormat::Json, Some(out)) => {
            for page in &pages {
                write_output(&out, &page.path, "index.json", &serde_json::to_string_pretty(page)?)?;
            }
            write_output(&out, "/", "site.json", &serde_json::to_string_pretty(&site)?)?;
        }
        (OutputFormat::Html, None) => {
            for page in &pages {
                println!("{}", html::render_html(page, &cfg, &site));
            }
        }
        (OutputFormat::Html, Some(out)) => write_html_site(&out, &pages, &site, &cfg)?,
        (OutputFormat::Sheet, None) => {
            for page in &pages {
                println!("{}", sheet::render_sheet(page));
            }
        }
        (OutputFormat::Sheet, Some(out)) => {
            for page in &pages {
                write_output(&out, &page.path, "index.txt", &sheet::render_sheet(page))?;
            }
        }
    }

    Ok(())
}

fn write_html_site(out: &Path, pages: &[RenderedPage], site: &Site, cfg: &Config) -> Result<()> {
    for page in pages {
        write_output(out, &page.path, "index.html", &html::render_html(page, cfg, site))?;
    }

    let listings = [
        ("Favourites", FAVOURITES_PATH, site.favourites.clone()),
        ("20 newest songs", NEWEST_PATH, site.newest.clone()),
        ("All songs", SONGS_PATH, site.songs.clone()),
        ("All authors", AUTHORS_PATH, site.author_links()),
    ];
    for (title, path, links) in listings {
        let document = html::render_listing_html(title, path, &links, cfg, site);
        write_output(out, path, "index.html", &document)?;
    }

    for author in &site.authors {
        let clashes = site::LISTING_PATHS.contains(&author.path.as_str())
            || pages.iter().any(|page| page.path == author.path);
        if clashes {
            log::warn!("author page {} clashes with another page, skipping", author.path);
            continue;
        }
        write_output(out, &author.path, "index.html", &html::render_author_html(author, cfg, site))?;
    }
    Ok(())
}

fn write_output(out: &Path, site_path: &str, file_name: &str, contents: &str) -> Result<()> {
    let mut dir = out.to_path_buf();
    for component in Path::new(site_path).components() {
        match component {
            Component::Normal(part) => dir.push(part),
            Component::RootDir | Component::CurDir => {}
            Component::ParentDir | Component::Prefix(_) => {
                log::warn!("refusing to write outside {}: {site_path}", out.display());
                return Ok(());
            }
        }
    }
    fs::create_dir_all(&dir)?;
    let target = dir.join(file_name);
    fs::write(&target, contents)?;
    log::info!("wrote {}", target.display());
    Ok(())
}
