use clap::Args;
use mvr_common::config::Config;
use mvr_common::error::Result;

#[derive(Args, Debug)]
pub struct ShowConfig;

impl ShowConfig {
    pub fn run(&self, config: &Config) -> Result<()> {
        // repository_password is skipped by the Serialize impl.
        println!("{}", serde_json::to_string_pretty(config)?);
        Ok(())
    }
}
