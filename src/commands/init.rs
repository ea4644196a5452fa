use crate::{
    libs::{config::Config, data_storage::DataStorage, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Print where the configuration is stored and exit
    #[arg(short, long)]
    path: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.path {
        msg_info!(DataStorage::new().base_path().display());
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
