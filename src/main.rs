use anyhow::Result;
use clap::Parser;
use std::path::Path;
use std::str::FromStr;

use git_release::domain::{ReleaseType, Version};
use git_release::error::ReleaseError;
use git_release::shell::Shell;
use git_release::{config, git_ops, manifest, release, ui};

#[derive(clap::Parser)]
#[command(
    name = "git-release",
    about = "Plan and publish semantic-version releases from git tags"
)]
struct Args {
    #[arg(
        short = 't',
        long = "type",
        default_value = "patch",
        help = "Release type: major, minor, or patch"
    )]
    release_type: String,

    #[arg(short, long, help = "Pre-release identifier (alpha, beta, rc, ...)")]
    prerelease: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Skip confirmation prompts")]
    force: bool,

    #[arg(long, help = "Print version information")]
    version: bool,
}

fn main() {
    let args = Args::parse();

    if args.version {
        println!("git-release {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Err(e) = run(&args) {
        // A failed child command prints its captured stderr and propagates
        // its own exit code; the exit decision lives here, at the top level.
        if let Some(release_err) = e.downcast_ref::<ReleaseError>() {
            if let ReleaseError::Command { stderr, .. } = release_err {
                eprint!("{}", stderr);
            }
            ui::display_error(&release_err.to_string());
            std::process::exit(release_err.exit_code());
        }
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let release_type = ReleaseType::from_str(&args.release_type)?;
    let config = config::load_config(args.config.as_deref())?;

    let repo = git_ops::GitRepo::new()?;
    let tags = repo.list_tags()?;

    let manifest_path = Path::new("Cargo.toml");
    let current = manifest::read_version(manifest_path)?;

    let next = match args.prerelease.as_deref() {
        Some(id) => release::next_prerelease_version(&current, id, release_type)?,
        None => next_stable_version(&current, release_type)?,
    };

    let range = release::changelog_commit_range(&tags, args.prerelease.as_deref());
    ui::display_release_plan(&current, &next, &range);

    if args.dry_run {
        ui::display_status("Dry run - no changes made");
        return Ok(());
    }

    if !args.force && !ui::confirm_action(&format!("Release {}?", next))? {
        println!("Release cancelled by user.");
        return Ok(());
    }

    manifest::write_version(manifest_path, &next)?;
    ui::display_success(&format!("Updated {} to {}", manifest_path.display(), next));

    let tag_name = format!("{}{}", config.tag_prefix, next);
    repo.create_tag(&tag_name)?;
    ui::display_success(&format!("Created tag: {}", tag_name));

    ui::display_status(&format!("Pushing tag {} to {}", tag_name, config.remote));
    repo.push_tag(&tag_name, &config.remote)?;
    ui::display_success(&format!("Pushed tag: {}", tag_name));

    if let Some(publish_command) = &config.publish_command {
        let shell = Shell::new(&config.local_bin_dir);
        shell.run_verbose(publish_command)?;
        ui::display_success("Published");
    }

    Ok(())
}

/// Next stable version: bump from a stable current version, or promote a
/// pre-release line by dropping its pre-release component.
fn next_stable_version(current: &str, release_type: ReleaseType) -> Result<String> {
    let version = Version::parse(current)?;
    let next = if version.is_stable() {
        version.bump(release_type)
    } else {
        Version::new(version.major, version.minor, version.patch)
    };
    Ok(next.to_string())
}
