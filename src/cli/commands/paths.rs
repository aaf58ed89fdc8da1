//! Paths command implementation

use crate::cli::{CliError, Connection};
use crate::client::NetBoxClient;
use crate::export::{project_locations, write_pretty_json};
use crate::index::RegionIndex;
use std::path::Path;

/// Handle the paths command: export every region and site with its
/// fully-qualified hierarchy path.
pub fn handle_paths(connection: &Connection, output: &Path) -> Result<(), CliError> {
    let client = NetBoxClient::new(&connection.url, &connection.token)?;

    let regions = client.regions()?;
    let sites = client.sites()?;

    let index = RegionIndex::build(regions.iter().cloned());
    let records = project_locations(&regions, &sites, &index);

    write_pretty_json(output, &records)?;
    println!(
        "Exported {} location paths to {}",
        records.len(),
        output.display()
    );
    Ok(())
}
