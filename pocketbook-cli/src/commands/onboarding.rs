//! Onboarding command - inspect and change the onboarding-seen flag

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use super::get_context;

#[derive(Subcommand)]
pub enum OnboardingCommands {
    /// Show whether onboarding would be displayed
    Status,
    /// Mark onboarding as seen
    Seen,
    /// Show onboarding again on next run
    Reset,
}

pub async fn run(command: OnboardingCommands) -> Result<()> {
    let ctx = get_context()?;
    let service = &ctx.onboarding_service;

    match command {
        OnboardingCommands::Status => {
            let seen = service.has_seen().await;
            let show = service.should_show().await;
            println!("Seen: {}", if seen { "yes" } else { "no" });
            if show && seen {
                println!(
                    "{}",
                    "Onboarding forced on by alwaysShowOnboarding.".yellow()
                );
            }
            println!("Would show: {}", if show { "yes" } else { "no" });
        }
        OnboardingCommands::Seen => {
            service.mark_seen().await;
            println!("{}", "Onboarding marked as seen.".green());
        }
        OnboardingCommands::Reset => {
            service.reset().await;
            println!("{}", "Onboarding will be shown again.".green());
        }
    }

    Ok(())
}
