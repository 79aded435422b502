use clap::Args;
use colored::Colorize;
use mvr_common::cache::LocalRepository;
use mvr_common::config::Config;
use mvr_common::error::Result;
use mvr_common::model::{ArtifactCoordinate, JarArtifact};
use mvr_net::RemoteRepository;

#[derive(Args, Debug)]
pub struct Paths {
    /// Artifact as groupId:artifactId:version
    #[arg(value_name = "COORD")]
    pub coordinate: ArtifactCoordinate,
}

impl Paths {
    pub fn run(&self, config: &Config) -> Result<()> {
        let artifact = JarArtifact::new(&self.coordinate);
        let local = LocalRepository::new(config.local_repository());
        let remote = RemoteRepository::from_config(config)?;
        let present = local.present_files(&artifact);

        println!("{}", artifact.to_string().bold());
        if local.contains(&artifact) {
            println!("  {} ({} of 4 files)", "cached".green(), present.len());
        } else {
            println!("  {}", "not cached".yellow());
        }
        println!("  remote: {} {}", remote.id(), remote.base_url());
        for relative in artifact.all_paths() {
            let path = local.path_of(relative);
            let marker = if present.contains(&path) {
                "✓".green()
            } else {
                "-".dimmed()
            };
            println!("  {} {}", marker, path.display());
            println!("      {}", remote.url_for(relative)?);
        }
        Ok(())
    }
}
