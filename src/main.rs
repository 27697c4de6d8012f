use std::io;

use anyhow::Result;

use budget_tracker::shell::Shell;

fn main() -> Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let shell = Shell::new(stdin.lock(), io::stdout());
    shell.run()?;

    Ok(())
}
