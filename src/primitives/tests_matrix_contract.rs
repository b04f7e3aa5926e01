// =========================================================================
// Matrix algebra contract
//
// Identities every Matrix<T> must satisfy regardless of element type.
// Integer-valued f64 data keeps products exact so comparisons are strict.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

fn integer_valued(rows: usize, cols: usize, seed: i64) -> Matrix<f64> {
    let data: Vec<f64> = (0..rows * cols)
        .map(|i| ((i as i64 * 7 + seed) % 11 - 5) as f64)
        .collect();
    Matrix::from_vec(rows, cols, data).expect("valid")
}

/// (A^T)^T = A
#[test]
fn contract_transpose_involution() {
    let a = integer_valued(2, 3, 1);
    assert_eq!(a.transpose().transpose(), a);
}

/// (m x n)^T = (n x m)
#[test]
fn contract_transpose_swaps_shape() {
    let a = Matrix::<f32>::zeros(3, 5);
    assert_eq!(a.transpose().shape(), (5, 3));
}

/// (m x k) * (k x n) = (m x n)
#[test]
fn contract_matmul_shape() {
    let a = Matrix::filled(2, 3, 1.0_f32);
    let b = Matrix::filled(3, 4, 1.0_f32);
    let c = a.matmul(&b).expect("compatible dims");
    assert_eq!(c.shape(), (2, 4));
    assert!(c.as_slice().iter().all(|&x| (x - 3.0).abs() < 1e-6));
}

/// A * I = A and I * A = A
#[test]
fn contract_identity_matmul() {
    let a = integer_valued(3, 3, 4);
    let eye = Matrix::<f64>::eye(3);
    assert_eq!(a.matmul(&eye).expect("3x3 * 3x3"), a);
    assert_eq!(eye.matmul(&a).expect("3x3 * 3x3"), a);
}

/// (A B)^T = B^T A^T
#[test]
fn contract_product_transpose() {
    let a = integer_valued(2, 4, 3);
    let b = integer_valued(4, 3, 9);
    let lhs = a.matmul(&b).expect("2x4 * 4x3").transpose();
    let rhs = b.transpose().matmul(&a.transpose()).expect("3x4 * 4x2");
    assert_eq!(lhs, rhs);
}

/// A + B - B = A
#[test]
fn contract_add_sub_inverse() {
    let a = integer_valued(3, 2, 2);
    let b = integer_valued(3, 2, 5);
    let back = a.add(&b).expect("same shape").sub(&b).expect("same shape");
    assert_eq!(back, a);
}

/// Shape errors never produce a result
#[test]
fn contract_mismatch_is_error() {
    let a = Matrix::<i32>::zeros(2, 3);
    let b = Matrix::<i32>::zeros(3, 2);
    assert!(a.add(&b).is_err());
    assert!(a.sub(&b).is_err());
    assert!(a.matmul(&a).is_err());
    assert!(a.matmul(&b).is_ok());
}

mod matrix_proptest_contract {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_transpose_involution(
            rows in 0..=8usize,
            cols in 0..=8usize,
            seed in 0..500u32,
        ) {
            let data: Vec<f32> = (0..rows * cols)
                .map(|i| ((i as f32 + seed as f32) * 0.37).sin() * 10.0)
                .collect();
            let a = Matrix::from_vec(rows, cols, data).expect("valid");
            let att = a.transpose().transpose();

            prop_assert_eq!(att.shape(), a.shape());
            prop_assert_eq!(att.as_slice(), a.as_slice());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn prop_identity_matmul(
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            let data: Vec<f32> = (0..n * n)
                .map(|i| ((i as f32 + seed as f32) * 0.37).sin() * 10.0)
                .collect();
            let a = Matrix::from_vec(n, n, data).expect("valid");
            let result = a.matmul(&Matrix::<f32>::eye(n)).expect("compatible");

            prop_assert!(result.approx_eq(&a));
        }
    }
}
