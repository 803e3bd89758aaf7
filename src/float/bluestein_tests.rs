use super::*;
use alloc::vec;
use alloc::vec::Vec;
use core::f64::consts::PI;

const EPSILON: f64 = 1e-9;

fn assert_feq(a: f64, b: f64) {
    assert!(
        (a - b).abs() < EPSILON,
        "Float mismatch: {} vs {}", a, b
    );
}

/// O(n^2) reference DFT.
fn naive_dft(real: &[f64], imag: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = real.len();
    let mut out_re = vec![0.0; n];
    let mut out_im = vec![0.0; n];
    for k in 0..n {
        for t in 0..n {
            let angle = -2.0 * PI * ((k * t) % n) as f64 / n as f64;
            let (s, c) = (angle.sin(), angle.cos());
            out_re[k] += real[t] * c - imag[t] * s;
            out_im[k] += real[t] * s + imag[t] * c;
        }
    }
    (out_re, out_im)
}

fn tables(n: usize) -> (TrigTable, TrigTable) {
    let m = crate::common::convolution_len(n).unwrap();
    (TrigTable::chirp(n), TrigTable::twiddles(m))
}

#[test]
fn test_convolve_impulse_identity() {
    let m = 8;
    let twiddles = TrigTable::twiddles(m);
    let mut x = vec![0.0; m];
    let mut y = vec![0.0; m];
    x[0] = 1.0;
    y[0] = 1.0;
    let zeros = vec![0.0; m];
    let mut out_re = vec![0.0; m];
    let mut out_im = vec![0.0; m];

    convolve_complex(&twiddles, &x, &zeros, &y, &zeros, &mut out_re, &mut out_im).unwrap();

    assert_feq(out_re[0], 1.0);
    assert_feq(out_im[0], 0.0);
    for i in 1..m {
        assert_feq(out_re[i], 0.0);
        assert_feq(out_im[i], 0.0);
    }
}

#[test]
fn test_convolve_matches_naive_circular() {
    let m = 8;
    let twiddles = TrigTable::twiddles(m);
    let xr = [1.0, 2.0, 0.0, -1.0, 0.5, 0.0, 3.0, 1.0];
    let xi = [0.0, 1.0, -1.0, 0.0, 2.0, 0.5, 0.0, 0.0];
    let yr = [0.5, 0.0, 1.0, 0.0, 0.0, -2.0, 0.0, 1.0];
    let yi = [1.0, 0.0, 0.0, 0.5, 0.0, 0.0, 1.0, 0.0];
    let mut out_re = vec![0.0; m];
    let mut out_im = vec![0.0; m];

    convolve_complex(&twiddles, &xr, &xi, &yr, &yi, &mut out_re, &mut out_im).unwrap();

    for k in 0..m {
        let (mut re, mut im) = (0.0, 0.0);
        for t in 0..m {
            let u = (k + m - t) % m;
            re += xr[t] * yr[u] - xi[t] * yi[u];
            im += xr[t] * yi[u] + xi[t] * yr[u];
        }
        assert_feq(out_re[k], re);
        assert_feq(out_im[k], im);
    }
    // Inputs are copied, not transformed in place.
    assert_eq!(xr, [1.0, 2.0, 0.0, -1.0, 0.5, 0.0, 3.0, 1.0]);
}

#[test]
fn test_convolve_length_mismatch() {
    let twiddles = TrigTable::twiddles(8);
    let x = vec![1.0; 8];
    let short = vec![1.0; 4];
    let mut out_re = vec![7.0; 8];
    let mut out_im = vec![7.0; 8];

    assert_eq!(
        convolve_complex(&twiddles, &x, &x, &short, &x, &mut out_re, &mut out_im),
        Err(FftError::SizeMismatch)
    );
    assert!(out_re.iter().chain(out_im.iter()).all(|&v| v == 7.0));
}

#[test]
fn test_convolve_not_power_of_two() {
    let twiddles = TrigTable::twiddles(8);
    let x = vec![1.0; 6];
    let mut out_re = vec![0.0; 6];
    let mut out_im = vec![0.0; 6];
    assert_eq!(
        convolve_complex(&twiddles, &x, &x, &x, &x, &mut out_re, &mut out_im),
        Err(FftError::NotPowerOfTwo)
    );
}

#[test]
fn test_bluestein_matches_naive() {
    for n in [1usize, 2, 3, 5, 6, 7, 12] {
        let (chirp, twiddles) = tables(n);
        let input_re: Vec<f64> = (0..n).map(|i| (i as f64 * 0.7).sin() + 0.25).collect();
        let input_im: Vec<f64> = (0..n).map(|i| (i as f64 * 1.3).cos() - 0.5).collect();
        let (expected_re, expected_im) = naive_dft(&input_re, &input_im);

        let mut real = input_re.clone();
        let mut imag = input_im.clone();
        bluestein_transform(&mut real, &mut imag, &chirp, &twiddles).unwrap();

        for k in 0..n {
            assert_feq(real[k], expected_re[k]);
            assert_feq(imag[k], expected_im[k]);
        }
    }
}

#[test]
fn test_bluestein_dc_5() {
    let (chirp, twiddles) = tables(5);
    let mut real = vec![1.0; 5];
    let mut imag = vec![0.0; 5];
    bluestein_transform(&mut real, &mut imag, &chirp, &twiddles).unwrap();

    assert_feq(real[0], 5.0);
    assert_feq(imag[0], 0.0);
    for i in 1..5 {
        assert_feq(real[i], 0.0);
        assert_feq(imag[i], 0.0);
    }
}

#[test]
fn test_bluestein_rejects_small_table() {
    let chirp = TrigTable::chirp(5);
    let twiddles = TrigTable::twiddles(8);
    let mut real = vec![1.0; 5];
    let mut imag = vec![0.0; 5];
    assert_eq!(
        bluestein_transform(&mut real, &mut imag, &chirp, &twiddles),
        Err(FftError::SizeMismatch)
    );
    assert_eq!(real, vec![1.0; 5]);
}
