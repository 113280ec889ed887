use furrow_navigation::astar::astar_search;
use furrow_navigation::coverage::coverage_scan;
use furrow_navigation::tour::{GreedyRouter, NearestNeighborTour, TourPlanner};
use furrow_navigation::{CellKind, FieldGrid, FieldTask, Position};
use std::collections::HashSet;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A 10x8 field with a few obstacles and young crops to spray
    let mut grid = FieldGrid::new(10, 8, CellKind::BarrenLand);

    let stones = [(2, 1), (2, 2), (2, 3), (6, 4), (7, 4), (8, 4), (4, 6)];
    for (x, y) in stones {
        grid.set_cell(Position::new(x, y), CellKind::Stone)?;
    }
    grid.set_cell(Position::new(5, 0), CellKind::Truck)?;

    let crops = [(1, 2), (4, 1), (9, 0), (7, 6), (3, 5)];
    for (x, y) in crops {
        grid.set_cell(Position::new(x, y), CellKind::Young)?;
    }

    let start = Position::new(0, 0);
    println!("{}", grid);

    if let Some(path) = astar_search(&grid, start, Position::new(9, 7)) {
        println!("A* to (9, 7): {} waypoints", path.len());
        print_field(&grid, start, &path);
    } else {
        println!("A* to (9, 7): no path found.");
    }

    let goals = FieldTask::PesticideControl.goals(&grid);
    println!("\nPesticide targets: {:?}", goals);

    let planners: [&dyn TourPlanner; 2] = [&GreedyRouter, &NearestNeighborTour];
    for planner in planners {
        match planner.plan_tour(&grid, start, &goals) {
            Some(tour) => {
                println!("\n{} tour: {} steps", planner.name(), tour.len() - 1);
                print_field(&grid, start, &tour);
            }
            None => println!("\n{} tour: no path found.", planner.name()),
        }
    }

    let sweep = coverage_scan(&grid, start);
    println!(
        "\nCoverage sweep: {} waypoints for {} cells",
        sweep.len(),
        grid.total_cells()
    );

    Ok(())
}

fn print_field(grid: &FieldGrid, start: Position, path: &[Position]) {
    let on_path: HashSet<Position> = path.iter().copied().collect();

    for y in 0..grid.height() as i32 {
        print!("{} ", y);
        for x in 0..grid.width() as i32 {
            let p = Position::new(x, y);
            let glyph = if p == start {
                'S'
            } else if grid.cell(p).is_some_and(CellKind::is_blocking) {
                '#'
            } else if on_path.contains(&p) {
                '*'
            } else {
                '.'
            };
            print!("{} ", glyph);
        }
        println!();
    }
}
