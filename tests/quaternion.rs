use quatern::Quaternion;

type Q = Quaternion<i64>;

/// Small deterministic set of quaternions with mixed signs and zeros.
fn samples() -> Vec<Q> {
    let coeffs = [-3, -1, 0, 2, 5];
    let mut out = Vec::new();
    for (n, &a) in coeffs.iter().enumerate() {
        let b = coeffs[(n + 1) % coeffs.len()];
        let c = coeffs[(n + 3) % coeffs.len()];
        let d = coeffs[(n * 2) % coeffs.len()];
        out.push(Q::new(a, b, c, d));
    }
    out.push(Q::zero());
    out.push(Q::one());
    out.push(Q::i());
    out.push(Q::j());
    out.push(Q::k());
    out
}

// ── Algebraic properties ─────────────────────────────────────────────

#[test]
fn addition_commutes() {
    for p in samples() {
        for q in samples() {
            assert_eq!(p + q, q + p, "{:?} + {:?}", p, q);
        }
    }
}

#[test]
fn multiplication_associates() {
    for p in samples() {
        for q in samples() {
            for r in samples() {
                assert_eq!((p * q) * r, p * (q * r), "{:?} {:?} {:?}", p, q, r);
            }
        }
    }
}

#[test]
fn multiplication_does_not_commute() {
    let i = Q::i();
    let j = Q::j();
    assert_ne!(i * j, j * i);
    assert_eq!(i * j, -(j * i));
}

#[test]
fn multiplication_distributes_over_addition() {
    for p in samples() {
        for q in samples() {
            for r in samples() {
                assert_eq!(p * (q + r), p * q + p * r);
                assert_eq!((q + r) * p, q * p + r * p);
            }
        }
    }
}

#[test]
fn conjugate_is_an_involution() {
    for p in samples() {
        assert_eq!(p.conjugate().conjugate(), p);
    }
}

#[test]
fn conjugate_reverses_products() {
    for p in samples() {
        for q in samples() {
            assert_eq!((p * q).conjugate(), q.conjugate() * p.conjugate());
        }
    }
}

#[test]
fn float_products_match_integer_products() {
    for p in samples() {
        for q in samples() {
            let pf = p.cast::<f64>().unwrap();
            let qf = q.cast::<f64>().unwrap();
            assert_eq!((p * q).cast::<f64>(), Some(pf * qf));
        }
    }
}

// ── Formatting ───────────────────────────────────────────────────────

#[test]
fn display_table() {
    let cases: &[([f64; 4], &str)] = &[
        ([0.0, 0.0, 0.0, 0.0], "0"),
        ([1.0, 0.0, 0.0, 0.0], "1.0"),
        ([0.0, 1.0, 0.0, 0.0], "i"),
        ([0.0, -1.0, 0.0, 0.0], "-i"),
        ([1.0, 2.0, 0.0, 0.0], "1.0+2.0i"),
        ([0.0, 0.0, -1.0, 0.0], "-j"),
        ([1.0, -2.0, 3.0, -4.0], "1.0-2.0i+3.0j-4.0k"),
        ([0.0, -2.0, 0.0, 1.0], "-2.0i+k"),
        ([-1.5, 1.0, -1.0, 0.5], "-1.5+i-j+0.5k"),
        ([0.0, 0.0, 0.0, -7.25], "-7.25k"),
        ([1e6, 0.0, 0.0, 0.0], "1000000.0"),
    ];
    for (coeffs, expected) in cases {
        assert_eq!(Quaternion::<f64>::from(*coeffs).to_string(), *expected);
    }
}

#[test]
fn display_of_computed_values() {
    let p = Quaternion::new(1.0, 3.0, 5.0, 2.0);
    let q = Quaternion::new(-2.0, 2.0, 8.0, -1.0);
    assert_eq!((p + q).to_string(), "-1.0+5.0i+13.0j+k");
    assert_eq!((p * q).to_string(), "-46.0-25.0i+5.0j+9.0k");
    assert_eq!(p.conjugate().to_string(), "1.0-3.0i-5.0j-2.0k");
}

#[test]
fn debug_form() {
    let q = Quaternion::new(3.5, 2.25, -100.0, -1.25);
    assert_eq!(format!("{:?}", q), "Quaternion(3.5, 2.25, -100.0, -1.25)");
    assert_eq!(format!("{:?}", Quaternion::<f64>::default()), "Quaternion(0.0, 0.0, 0.0, 0.0)");
}
