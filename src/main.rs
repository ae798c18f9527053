use readonly_services::rules::default_registry;
use readonly_services::run_main;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Rules are built per command so CLI rule options reach them
    run_main(default_registry)?;
    Ok(())
}
