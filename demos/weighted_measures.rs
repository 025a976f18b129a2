//! Sample weights as fractional multiplicities.
//!
//! Walks through the weighted entropy and mutual information measures:
//! integer weights behave exactly like replicating samples, all-ones weights
//! reproduce the unweighted measures, and fractional weights interpolate
//! between subpopulations.
//!
//! Run: cargo run --example weighted_measures

use mibits::{hx, mi, whx, wmi};

fn main() {
    // -- Integer weights replicate samples -----------------------------------
    let x = [0, 0, 1, 1];
    let weights = [2.0, 2.0, 1.0, 1.0];
    let weighted = whx(&x, &weights).unwrap();

    // The same distribution written out sample by sample.
    let expanded = [0, 0, 0, 0, 1, 1];
    let replicated = hx(&expanded);

    println!("x = {x:?}, weights = {weights:?}");
    println!("weighted entropy:   {weighted:.6} bits");
    println!("expanded multiset:  {replicated:.6} bits");
    println!("difference:         {:+.3e}\n", weighted - replicated);

    // -- All-ones weights change nothing -------------------------------------
    let y = [0, 1, 0, 2, 1, 0, 2, 2];
    let ones = [1.0; 8];
    println!("y = {y:?}");
    println!("hx(y)        = {:.6} bits", hx(&y));
    println!("whx(y, ones) = {:.6} bits\n", whx(&y, &ones).unwrap());

    // -- Fractional weights blend subpopulations ------------------------------
    // First half: b copies a. Second half: b is independent of a.
    let a = [0, 0, 1, 1, 0, 0, 1, 1];
    let b = [0, 0, 1, 1, 0, 1, 0, 1];

    let uniform = [1.0; 8];
    let coupled_only = [1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0];
    let mostly_independent = [0.25, 0.25, 0.25, 0.25, 1.0, 1.0, 1.0, 1.0];

    println!("a = {a:?}");
    println!("b = {b:?}  (tracks a in the first half only)");
    println!(
        "I(a;b), both halves equal:      {:.4} bits",
        wmi(&a, &b, &uniform).unwrap()
    );
    println!(
        "I(a;b), coupled half only:      {:.4} bits",
        wmi(&a, &b, &coupled_only).unwrap()
    );
    println!(
        "I(a;b), coupled half at 1/4:    {:.4} bits",
        wmi(&a, &b, &mostly_independent).unwrap()
    );
    println!(
        "I(a;b), unweighted reference:   {:.4} bits",
        mi(&a, &b).unwrap()
    );
}
