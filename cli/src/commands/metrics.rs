use anyhow::Result;
use automap::{compute_metrics, PlanDocument, PrecinctMap};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::MetricsArgs) -> Result<()> {
    let map = PrecinctMap::read_from_geojson_file(&args.geojson)?;
    let document = PlanDocument::read_from_file(&args.plan)?;

    tracing::info!(
        plan = %document.plan_id,
        districts = document.num_districts,
        assigned = document.assignments.len(),
        "computing metrics"
    );
    let report = compute_metrics(&map, &document.assignments, document.num_districts);

    println!("{} ({})", document.name, document.state);
    println!(
        "{:>8} {:>12} {:>10} {:>10} {:>7} {:>9} {:>12}",
        "district", "population", "dem", "rep", "lean", "deviation", "compactness"
    );
    for (district, m) in &report.by_district {
        println!(
            "{:>8} {:>12} {:>10} {:>10} {:>6.1}% {:>+8.2}% {:>12.3}",
            district, m.population, m.dem_votes, m.rep_votes,
            m.partisan_lean * 100.0, m.population_deviation * 100.0, m.compactness
        );
    }

    let seats = &report.seats;
    println!(
        "D {} R {} tossup {} | statewide {:.1}% | efficiency gap {:+.2}% (positive favors R)",
        seats.dem_seats, seats.rep_seats, seats.tossup_seats,
        report.statewide_dem_share * 100.0,
        report.efficiency_gap * 100.0
    );

    Ok(())
}
