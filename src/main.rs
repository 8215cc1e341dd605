use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;

use grid_compose::Photo;
use photopack::batch::{RunStatus, run_storefronts};
use photopack::config::default_storefronts;
use photopack::decode_photo;

/// Prepare one folder of product photos for every configured storefront:
/// photos beyond a storefront's image limit are merged into 2x2 grid
/// composites, keeping the first and last photos untouched.
#[derive(Parser, Debug)]
#[command(name = "photopack")]
#[command(about = "📷 Pack a product photo set to fit each storefront's image limit")]
#[command(
    long_about = "Pack a product photo set to fit each storefront's image limit.
Reads every image in the input folder in filename order, runs one compaction
per storefront, and writes each result set into its own output subfolder."
)]
struct Args {
    /// Folder holding the input photos (read in filename order)
    #[arg(help = "Input folder with at least 3 photos")]
    input: PathBuf,

    /// Output folder; one subfolder is created per storefront
    #[arg(short, long, default_value = "packed", help = "Output folder root")]
    out: PathBuf,

    /// Management id used as the filename base of every written photo
    #[arg(long, default_value = "image", help = "Filename base, e.g. an SKU or listing id")]
    id: String,

    /// Run only the storefronts with these ids (default: all)
    #[arg(long, help = "Storefront ids to run, e.g. --only mercari --only rakuten")]
    only: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let photos = load_photos(&args.input)?;
    println!("Loaded {} photos from {}", photos.len(), args.input.display());

    let mut configs = default_storefronts();
    if !args.only.is_empty() {
        configs.retain(|c| args.only.iter().any(|id| id == &c.id));
        if configs.is_empty() {
            bail!("no storefront matches the given --only ids");
        }
    }

    let reports = run_storefronts(&photos, &configs).await?;

    let mut failures = 0usize;
    for report in &reports {
        match &report.status {
            RunStatus::Packed(set) => {
                let dir = write_set(&args.out, &report.id, &args.id, set)?;
                println!("{}: packed to {} images → {}", report.name, set.len(), dir.display());
            }
            RunStatus::Passthrough(set) => {
                let dir = write_set(&args.out, &report.id, &args.id, set)?;
                println!(
                    "{}: already within limit, {} images → {}",
                    report.name,
                    set.len(),
                    dir.display()
                );
            }
            RunStatus::Infeasible {
                middle_count,
                capacity,
            } => {
                eprintln!(
                    "{}: cannot satisfy the limit even with maximal merging ({} middle photos, capacity {})",
                    report.name, middle_count, capacity
                );
                failures += 1;
            }
            RunStatus::Failed(err) => {
                eprintln!("{}: {}", report.name, err);
                failures += 1;
            }
        }
    }

    if failures == reports.len() {
        bail!("every storefront run failed");
    }
    Ok(())
}

/// Read every image file from `dir` in filename order.
fn load_photos(dir: &Path) -> Result<Vec<Photo>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("cannot read input folder {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_image_path(path))
        .collect();
    paths.sort();

    let mut photos = Vec::with_capacity(paths.len());
    for path in &paths {
        let bytes =
            fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("jpeg")
            .to_ascii_lowercase();
        let name = path.display().to_string();
        photos.push(decode_photo(&name, bytes, ext)?);
    }
    Ok(photos)
}

fn is_image_path(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    matches!(
        ext.to_ascii_lowercase().as_str(),
        "jpg" | "jpeg" | "png" | "gif" | "bmp" | "webp"
    )
}

/// Write a photo set as `{id}_{NN}.{ext}` files under `out/{storefront_id}/`.
fn write_set(out: &Path, storefront_id: &str, base: &str, set: &[Photo]) -> Result<PathBuf> {
    let dir = out.join(storefront_id);
    fs::create_dir_all(&dir).with_context(|| format!("cannot create {}", dir.display()))?;
    for (index, photo) in set.iter().enumerate() {
        let name = format!("{}_{:02}.{}", base, index + 1, photo.ext());
        let path = dir.join(name);
        fs::write(&path, photo.bytes())
            .with_context(|| format!("cannot write {}", path.display()))?;
    }
    Ok(dir)
}
