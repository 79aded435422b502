use clap::Args;
use colored::Colorize;
use mvr_common::cache::local_file_url;
use mvr_common::config::Config;
use mvr_common::error::Result;
use mvr_common::model::ArtifactCoordinate;
use mvr_core::DependencyResolver;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct Resolve {
    /// Artifacts as groupId:artifactId:version
    #[arg(required = true, value_name = "COORD")]
    pub coordinates: Vec<ArtifactCoordinate>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Print file:// URLs instead of paths
    #[arg(long)]
    pub urls: bool,
}

#[derive(Serialize)]
struct Resolved<'a> {
    coordinate: &'a ArtifactCoordinate,
    location: String,
}

impl Resolve {
    pub fn run(&self, config: &Config) -> Result<()> {
        let resolver = DependencyResolver::new(config)?;
        let locations = resolver.resolve_many(&self.coordinates)?;

        let mut resolved = Vec::with_capacity(locations.len());
        for (coordinate, path) in self.coordinates.iter().zip(&locations) {
            let location = if self.urls {
                local_file_url(path)?.to_string()
            } else {
                path.display().to_string()
            };
            resolved.push(Resolved {
                coordinate,
                location,
            });
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&resolved)?);
        } else {
            for entry in &resolved {
                println!("{} {}", entry.coordinate.to_string().bold(), entry.location);
            }
        }
        Ok(())
    }
}
