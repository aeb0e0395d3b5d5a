use anyhow::Result;
use automap::{generate_plan, GenerationConfig, PrecinctMap, Summary};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::GenerateArgs) -> Result<()> {
    let out_path = args.output.clone().unwrap_or("./plan.json".into());
    let config = GenerationConfig::new(args.districts, args.preset, args.target)?;

    tracing::info!(path = %args.geojson.display(), "loading precincts");
    let map = PrecinctMap::read_from_geojson_file(&args.geojson)?;

    if !config.has_custom_target() {
        println!("preset {}: {}", config.label(), config.preset().description());
    }
    let (plan, generation) = generate_plan(map, &config)?;
    println!("generated in {:.2?}", generation.elapsed);

    print_summary(&generation.summary);

    let document = plan.to_document(&args.state, args.name.as_deref())?;
    document.write_to_file(&out_path)?;
    println!("wrote {} ({}) to {}", document.name, document.plan_id, out_path.display());

    Ok(())
}

fn print_summary(summary: &Summary) {
    println!("{:>8} {:>12} {:>8} {:>8} {:>9} {:>9}", "district", "population", "dem", "rep", "counties", "precincts");
    for d in &summary.districts {
        println!(
            "{:>8} {:>12} {:>7.1}% {:>7.1}% {:>9} {:>9}",
            d.district, d.population, d.dem_share * 100.0, d.rep_share * 100.0, d.counties, d.precincts
        );
    }

    let seats = &summary.summary;
    println!(
        "target {:.1}% | average {:.1}% | D {} R {} tossup {} of {}",
        summary.target_dem_share * 100.0,
        seats.average_dem_share * 100.0,
        seats.dem_seats, seats.rep_seats, seats.tossup_seats, seats.total_districts
    );
}
