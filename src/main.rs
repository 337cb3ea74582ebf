use clap::Parser;
use cms_import::manifest::{ImportType, Indent};
use cms_import::naming::SlugMode;
use cms_import::{config, manifest, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cms-import")]
#[command(about = "Generate a CMS import manifest from a media directory")]
#[command(long_about = "\
Generate a CMS import manifest from a media directory

Scans the import directory's media subdirectory, validates each file for
the selected import type, and writes a JSON manifest describing the
importable content items.

Import layout:

  photos/
  ├── import.toml              # Options (optional)
  ├── _media/                  # Candidate files
  │   ├── My Photo #1.JPG      # → urlName \"my-photo-1\"
  │   ├── big-panorama.png     # Skipped if over 25MB (image imports)
  │   └── notes.txt            # Fine as document; rejected as image
  └── content.json             # Written manifest

Image imports skip files over 25MB and files outside jpg/jpeg/png/gif/bmp.
Hidden files and directories are always skipped. Document imports accept
any visible file. Every skip is reported on stderr and the run continues.

Run 'cms-import --print-config' for a documented import.toml.")]
#[command(version)]
struct Cli {
    /// CMS import directory (holds the media subdirectory)
    #[arg(required_unless_present = "print_config")]
    import_dir: Option<PathBuf>,

    /// How scanned files are treated
    #[arg(value_enum, required_unless_present = "print_config")]
    import_type: Option<ImportType>,

    /// Manifest filename within the import directory
    #[arg(long, conflicts_with = "stdout")]
    output: Option<String>,

    /// Write the manifest to stdout instead of a file
    #[arg(long)]
    stdout: bool,

    /// Use raw file stems as urlName (no slugging)
    #[arg(long)]
    plain_names: bool,

    /// Emit a bare item array without the document envelope
    #[arg(long)]
    bare: bool,

    /// Indent the manifest with tabs instead of three spaces
    #[arg(long)]
    tabs: bool,

    /// Media subdirectory name
    #[arg(long)]
    media_dir: Option<String>,

    /// Scan and report without writing a manifest
    #[arg(long, conflicts_with_all = ["stdout", "output"])]
    check: bool,

    /// Print a documented stock import.toml and exit
    #[arg(long, exclusive = true)]
    print_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    // clap enforces both positionals whenever --print-config is absent
    let import_dir = cli.import_dir.clone().unwrap();
    let import_type = cli.import_type.unwrap();

    let mut cfg = config::load_config(&import_dir)?;
    apply_overrides(&mut cfg, &cli);
    cfg.validate()?;

    let report = scan::scan_media(&import_dir, import_type, &cfg)?;
    output::eprint_skips(&report);

    if cli.check {
        output::print_scan_summary(&report, None);
        return Ok(());
    }

    let json = manifest::to_json(&report.items, cfg.envelope, cfg.indent)?;
    if cli.stdout {
        println!("{json}");
    } else {
        let manifest_path = import_dir.join(&cfg.output);
        manifest::write_manifest(&manifest_path, &json)?;
        output::print_scan_summary(&report, Some(&manifest_path));
    }

    Ok(())
}

/// Flags override `import.toml`; absent flags leave the file's choice alone.
fn apply_overrides(cfg: &mut config::ImportConfig, cli: &Cli) {
    if cli.plain_names {
        cfg.slug_mode = SlugMode::Plain;
    }
    if cli.bare {
        cfg.envelope = false;
    }
    if cli.tabs {
        cfg.indent = Indent::Tabs;
    }
    if let Some(output) = &cli.output {
        cfg.output = output.clone();
    }
    if let Some(media_dir) = &cli.media_dir {
        cfg.media_dir = media_dir.clone();
    }
}
