// File: crates/parkify_checkin/src/main.rs
use clap::Parser;
use parkify_checkin::cli::{execute, Cli, Command};
use parkify_checkin::session::run_session;
use parkify_checkin::CheckinPage;
use parkify_common::{config_error, ParkifyError};
use parkify_config::load_config;
use parkify_slots::HttpBookedSlotsClient;
use std::io::Write;
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ParkifyError> {
    let cli = Cli::parse();
    parkify_common::logging::init_with_level(cli.log_level());

    let mut config = load_config().map_err(config_error)?;
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    let client = HttpBookedSlotsClient::new(&config.api)?;
    let mut page = CheckinPage::new(client, &config.parking);

    match cli.command {
        Command::Interactive => {
            page.mount().await;
            let mut stdout = std::io::stdout();
            run_session(&mut page, BufReader::new(tokio::io::stdin()), &mut stdout).await?;
            writeln!(stdout)?;
        }
        command => {
            let output = execute(command, &mut page).await?;
            print!("{}", output);
        }
    }
    Ok(())
}
