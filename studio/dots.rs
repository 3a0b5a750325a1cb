//! The labelled dot set the `dots` binary trains on.
//!
//! Class A (`[1, 0]`) forms three diagonal arms in the left half-plane and
//! the upper right quadrant; class B (`[0, 1]`) sits in a band below the
//! x axis on the right and in a thin column along the positive y axis.

pub const CLASS_A: [f64; 2] = [1.0, 0.0];
pub const CLASS_B: [f64; 2] = [0.0, 1.0];

const DOTS_A: [(f64, f64); 18] = [
    (11.0, 8.0), (13.0, 10.0), (15.0, 12.0), (18.0, 15.0), (19.0, 17.0), (22.0, 20.0),
    (-11.0, 8.0), (-13.0, 10.0), (-15.0, 12.0), (-18.0, 15.0), (-19.0, 17.0), (-22.0, 20.0),
    (-11.0, -8.0), (-13.0, -10.0), (-15.0, -12.0), (-18.0, -15.0), (-19.0, -17.0), (-22.0, -20.0),
];

const DOTS_B: [(f64, f64); 24] = [
    (11.0, -32.0), (3.0, -18.0), (5.0, -20.0), (18.0, -36.0), (9.0, -38.0), (10.0, -39.0),
    (21.0, -32.0), (13.0, -18.0), (15.0, -20.0), (28.0, -36.0), (19.0, -38.0), (30.0, -39.0),
    (31.0, -32.0), (23.0, -18.0), (25.0, -20.0), (38.0, -36.0), (29.0, -38.0), (40.0, -39.0),
    (1.0, 32.0), (1.0, 18.0), (-1.0, 20.0), (0.0, 36.0), (-1.0, 38.0), (0.0, 9.0),
];

/// Returns `(inputs, targets)` with every dot as `[x, y]` and its one-hot class.
pub fn training_set() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let a = DOTS_A.iter().map(|&dot| (dot, CLASS_A));
    let b = DOTS_B.iter().map(|&dot| (dot, CLASS_B));
    a.chain(b)
        .map(|((x, y), class)| (vec![x, y], class.to_vec()))
        .unzip()
}
