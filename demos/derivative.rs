extern crate finite_difference;

use finite_difference::{finite_difference, Grid};

fn main() {

    let number_of_points = 26;
    let step = 2.0 * std::f64::consts::PI / (number_of_points - 1) as f64;

    let grid = Grid::uniform(0.0, step, number_of_points).unwrap();
    let values: Vec<f64> = grid.points().iter().map(|x| x.sin()).collect();

    let derivative = finite_difference(&grid, &values, 1, 6).unwrap();

    println!("x;sin;d_sin;cos");
    for i in 0..number_of_points {
        let x = grid.points()[i];
        println!("{:.4};{:.6};{:.6};{:.6}", x, values[i], derivative[i], x.cos());
    }
}
