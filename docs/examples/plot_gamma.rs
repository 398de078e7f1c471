// Gamma function along the real axis and along the line re(z) = 0.5.
// Prints JSON with 400 evaluation points per curve:
//   {"x":[...], "gamma":[...], "t":[...], "re":[...], "im":[...], "abs":[...]}
// Poles on the real axis come out as null.

use cgamma::{complex_gamma, Complex};

fn fmt_arr(v: &[f64]) -> String {
    let inner: Vec<String> = v
        .iter()
        .map(|x| if x.is_finite() { format!("{x:.6}") } else { "null".to_string() })
        .collect();
    format!("[{}]", inner.join(","))
}

fn main() {
    const N: usize = 400;

    // Real axis on [-4.5, 5], values clipped to ±10 so poles stay readable
    let x: Vec<f64> = (0..N).map(|i| -4.5 + 9.5 * i as f64 / (N - 1) as f64).collect();
    let gamma: Vec<f64> = x
        .iter()
        .map(|&xi| {
            let g = complex_gamma(Complex::new(xi, 0.0)).re;
            if g.abs() > 10.0 { f64::NAN } else { g }
        })
        .collect();

    // Critical line z = 0.5 + it, t in [-6, 6]
    let t: Vec<f64> = (0..N).map(|i| -6.0 + 12.0 * i as f64 / (N - 1) as f64).collect();
    let values: Vec<Complex<f64>> = t.iter().map(|&ti| complex_gamma(Complex::new(0.5, ti))).collect();
    let re: Vec<f64> = values.iter().map(|g| g.re).collect();
    let im: Vec<f64> = values.iter().map(|g| g.im).collect();
    let abs: Vec<f64> = values.iter().map(|g| g.norm()).collect();

    println!(
        "{{\"x\":{},\"gamma\":{},\"t\":{},\"re\":{},\"im\":{},\"abs\":{}}}",
        fmt_arr(&x),
        fmt_arr(&gamma),
        fmt_arr(&t),
        fmt_arr(&re),
        fmt_arr(&im),
        fmt_arr(&abs),
    );
}
