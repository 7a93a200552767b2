extern crate finite_difference;

use finite_difference::{Grid, WeightTable};

fn main() {

    let grid = Grid::new(vec![0.0, 0.3, 1.0, 1.8, 2.2, 3.0]).unwrap();
    let max_order = 2;
    let z = 1.5;

    let table = WeightTable::new(&grid, max_order, z).unwrap();

    println!("point;order0;order1;order2");
    for i in 0..table.num_points() {
        println!(
            "{:.2};{:.6};{:.6};{:.6}",
            grid.points()[i],
            table.weight(i, 0),
            table.weight(i, 1),
            table.weight(i, 2)
        );
    }
}
