//! Locate command: print candidate locations without reading

use pkgdata::error::Result;
use pkgdata::host::ModuleHost;

use crate::cli::ResourceArgs;

/// Print each location the resource would be read from, one per line
pub fn run(host: &impl ModuleHost, args: ResourceArgs) -> Result<()> {
    for location in pkgdata::locations(host, args.package, &args.resource)? {
        println!("{}", location.display());
    }
    Ok(())
}
