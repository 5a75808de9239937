use anyhow::Result;
use clap::Parser;

use tag_release::config;
use tag_release::domain::VersionBump;
use tag_release::git::{Git2Repository, Repository};
use tag_release::{message, resolver, ui};

#[derive(clap::Parser)]
#[command(
    name = "tag-release",
    about = "Prepare semantic-version release tags for applications in a shared repository"
)]
struct Args {
    #[arg(help = "Application to release")]
    applications: Vec<String>,

    #[arg(short, long, help = "Release message (skips the editor)")]
    message: Option<String>,

    #[arg(long, help = "Bump the major version component")]
    major: bool,

    #[arg(long, help = "Bump the minor version component")]
    minor: bool,

    #[arg(short = 'y', help = "Skip the confirmation prompt")]
    yolo: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Validate the CLI surface before touching the repository: usage errors
    // must not compute a tag
    if args.applications.is_empty() {
        ui::display_error("exactly one application name is required");
        std::process::exit(1);
    }
    if args.applications.len() > 1 {
        ui::display_error(&format!(
            "expected one application name, got {}",
            args.applications.len()
        ));
        std::process::exit(1);
    }
    if args.major && args.minor {
        ui::display_error("--major and --minor are mutually exclusive");
        std::process::exit(1);
    }

    let application = &args.applications[0];

    let bump = if args.major {
        VersionBump::Major
    } else if args.minor {
        VersionBump::Minor
    } else {
        VersionBump::Patch
    };

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize git operations
    let git_repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let existing_tags = match git_repo.list_tags() {
        Ok(tags) => tags,
        Err(e) => {
            ui::display_error(&format!("Failed to list tags: {}", e));
            std::process::exit(1);
        }
    };

    // Derive the next version for this application
    let resolution = match resolver::resolve_next(application, bump, &existing_tags) {
        Ok(resolution) => resolution,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let previous_name = resolution.previous_tag.as_ref().map(|t| t.to_string());
    let new_tag_name = resolution.new_tag.to_string();

    ui::display_status(&format!(
        "Scanning {} for release notes",
        resolver::revision_range(resolution.previous_tag.as_ref())
    ));

    let commit_log = match git_repo.commits_since(previous_name.as_deref()) {
        Ok(commits) => commits,
        Err(e) => {
            ui::display_error(&format!("Failed to read commit history: {}", e));
            std::process::exit(1);
        }
    };

    let release_commits = resolver::filter_release_commits(&commit_log, application);

    ui::display_proposed_tag(previous_name.as_deref(), &new_tag_name);

    if release_commits.is_empty() {
        ui::display_warning(&format!(
            "no commits mentioning [{}] in the scanned range",
            application
        ));
    } else {
        ui::display_release_commits(&release_commits, application);
    }

    let skip_confirmation = args.yolo || config.behavior.skip_confirmation;
    if !skip_confirmation && !ui::confirm_release(&new_tag_name)? {
        println!("Release cancelled by user.");
        return Ok(());
    }

    // Obtain the release message (flag text, or editor on a scratch file)
    let editor = message::resolve_editor(&config.editor.fallback);
    let release_message = match message::acquire_message(args.message.clone(), &editor) {
        Ok(text) => text,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let content = if config.output.include_commits {
        message::compose_with_commits(&resolution.new_tag, &release_message, &release_commits)
    } else {
        message::compose(&resolution.new_tag, &release_message)
    };

    if let Err(e) = message::write_message_file(&config.output.message_file, &content) {
        ui::display_error(&format!(
            "Failed to write '{}': {}",
            config.output.message_file, e
        ));
        std::process::exit(1);
    }

    ui::display_success(&format!(
        "Wrote {} for release {}",
        config.output.message_file, new_tag_name
    ));
    ui::display_manual_tag_instruction(&new_tag_name, &config.output.message_file);

    Ok(())
}
