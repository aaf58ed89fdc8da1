//! Devices command implementation

use crate::cli::{CliError, Connection};
use crate::client::NetBoxClient;
use crate::export::{project_devices, write_pretty_json};
use crate::index::{RegionIndex, SiteIndex};
use std::path::Path;

/// Handle the devices command: export every device with a resolvable site,
/// annotated with its management IP and site hierarchy path.
pub fn handle_devices(connection: &Connection, output: &Path) -> Result<(), CliError> {
    let client = NetBoxClient::new(&connection.url, &connection.token)?;

    let regions = client.regions()?;
    let sites = client.sites()?;
    let devices = client.devices()?;

    let region_index = RegionIndex::build(regions);
    let site_index = SiteIndex::build(sites);
    let records = project_devices(&devices, &site_index, &region_index);

    write_pretty_json(output, &records)?;
    println!(
        "Exported {} devices to {}",
        records.len(),
        output.display()
    );
    Ok(())
}
