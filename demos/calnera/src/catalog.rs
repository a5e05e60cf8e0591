//! The Calnera archipelago: three islands, six terminals, six ships.

use cc_core::Position;
use cc_fleet::TargetSpec;

// Map space is [0, 100]²; sizes are display diameters.
pub fn targets() -> Vec<TargetSpec> {
    vec![
        island("Calnera East", 10.0, 35.0, 200.0, 2, 4, "1,500,000"),
        island("Calnera Capital", 90.0, 30.0, 700.0, 3, 1, "3,000,000"),
        island("Calnera South", 50.0, 90.0, 500.0, 1, 1, "800,000"),
        terminal("Calnera East Terminal 1", 15.0, 25.0, "10,000 bbl", "200,000 bbl"),
        terminal("Calnera East Terminal 2", 10.0, 50.0, "60,000 bbl", "1,000,000 bbl"),
        terminal("Calnera East Terminal 3", 25.0, 50.0, "50,000 bbl", "80,000 bbl"),
        terminal("Calnera East Terminal 4", 20.0, 40.0, "30,000 bbl", "400,000 bbl"),
        terminal("Calnera South Terminal", 45.0, 65.0, "5,000 bbl", "30,000 bbl"),
        terminal("Deep Sea Terminal", 50.0, 20.0, "200,000 bbl", "3,000,000 bbl"),
    ]
}

// VLCCs carry a destination and cargo; the MT tankers start idle.
pub const SHIPS_CSV: &str = "\
name,x,y,heading,destination,current_inventory_bbl,available_capacity_bbl\n\
VLCC Petromax,30,40,45,Calnera East Terminal 2,1500000,500000\n\
VLCC Oceanking,60,25,315,Deep Sea Terminal,800000,1200000\n\
MT Seabridge,15,45,70,,,\n\
MT Starcruise,40,60,180,,,\n\
MT Voyager,70,55,225,,,\n\
MT Navigator,55,35,0,,,\n\
";

// Opening plans for the first two months inside the planning horizon.
pub const PLANS_CSV: &str = "\
month,decisions\n\
February,\"{\"\"production_bpd\"\": 120000, \"\"charters\"\": 1}\"\n\
March,\"{\"\"production_bpd\"\": 95000, \"\"charters\"\": 2}\"\n\
";

fn island(
    name:       &str,
    x:          f64,
    y:          f64,
    size:       f64,
    refineries: u32,
    terminals:  u32,
    population: &str,
) -> TargetSpec {
    TargetSpec::island(name, Position::new(x, y), size)
        .stat("Refineries", refineries.to_string())
        .stat("Terminals", terminals.to_string())
        .stat("Population", population)
}

fn terminal(name: &str, x: f64, y: f64, production: &str, inventory: &str) -> TargetSpec {
    TargetSpec::terminal(name, Position::new(x, y), 80.0)
        .stat("Production/Day", production)
        .stat("Inventory", inventory)
}
