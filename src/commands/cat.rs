//! Cat command: copy a resource to stdout

use std::io::{self, Write};

use pkgdata::error::Result;
use pkgdata::host::ModuleHost;

use crate::cli::ResourceArgs;

/// Write the resource's bytes to stdout
pub fn run(host: &impl ModuleHost, args: ResourceArgs) -> Result<()> {
    let mut stream = pkgdata::open(host, args.package, &args.resource)?;
    let mut stdout = io::stdout().lock();
    io::copy(&mut stream, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
