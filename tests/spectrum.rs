//! EN 1998-1 응답스펙트럼/파라미터 테이블 테스트.
use proptest::prelude::*;
use structural_code_toolbox::seismic::{
    branch, compute_lateral_force, damping_correction, design_ordinate, elastic_ordinate,
    horizontal_params, vertical_ordinate, vertical_params, GroundType, LateralForceInput,
    MalaysiaGroundType, NationalAnnex, ParameterLookupError, SpectrumBranch, SpectrumError,
    SpectrumOptions, SpectrumType, CT_CONCRETE_MOMENT_FRAME, ELASTIC_PERIOD_LIMIT_S,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn table_rows_match_code_values() {
    let b2 = GroundType::B.params(SpectrumType::Type2);
    assert_eq!((b2.s, b2.t_b, b2.t_c, b2.t_d), (1.35, 0.05, 0.25, 1.2));
    let d1 = GroundType::D.params(SpectrumType::Type1);
    assert_eq!((d1.s, d1.t_b, d1.t_c, d1.t_d), (1.35, 0.20, 0.8, 2.0));
    let fs = MalaysiaGroundType::FS.params();
    assert_eq!((fs.s, fs.t_b, fs.t_c, fs.t_d), (1.15, 0.20, 0.6, 2.0));
}

#[test]
fn unknown_ground_label_is_rejected() {
    let err = horizontal_params(NationalAnnex::Recommended, "Z", 2).unwrap_err();
    assert_eq!(
        err,
        ParameterLookupError::UnknownGroundType {
            label: "Z".to_string(),
            annex: NationalAnnex::Recommended,
        }
    );
    assert!(horizontal_params(NationalAnnex::Malaysia, "A", 2).is_err());
}

#[test]
fn unknown_equation_type_is_rejected() {
    assert_eq!(
        horizontal_params(NationalAnnex::Recommended, "B", 3),
        Err(ParameterLookupError::UnknownSpectrumType(3))
    );
    assert!(SpectrumType::try_from(0).is_err());
}

#[test]
fn malaysia_vertical_type1_is_not_tabulated() {
    assert!(matches!(
        vertical_params(NationalAnnex::Malaysia, SpectrumType::Type1),
        Err(ParameterLookupError::NotTabulated { .. })
    ));
    let v = vertical_params(NationalAnnex::Malaysia, SpectrumType::Type2).unwrap();
    assert_eq!(v.avg_ratio, 0.70);
}

#[test]
fn elastic_beyond_four_seconds_is_an_error() {
    let p = GroundType::B.params(SpectrumType::Type2);
    let err = elastic_ordinate(4.5, 0.2, &p, 5.0).unwrap_err();
    assert_eq!(
        err,
        SpectrumError::PeriodOutOfRange {
            period: 4.5,
            limit: ELASTIC_PERIOD_LIMIT_S,
        }
    );
    let vp = vertical_params(NationalAnnex::Recommended, SpectrumType::Type1).unwrap();
    assert!(vertical_ordinate(4.5, 0.2, &vp, 5.0).is_err());
}

#[test]
fn zero_period_returns_ground_acceleration() {
    let p = GroundType::C.params(SpectrumType::Type1);
    assert_eq!(elastic_ordinate(0.0, 0.3, &p, 5.0).unwrap(), 0.3);
    assert_eq!(design_ordinate(0.0, 0.3, &p, 3.0, 0.2), 0.3);
}

#[test]
fn short_period_ramp_for_type1_soil_b() {
    // T_B = 0.15 이므로 T = 0.1 은 선형 증가 구간
    let a_g = 0.2;
    let p = GroundType::B.params(SpectrumType::Type1);
    assert_eq!(p.branch(0.1), SpectrumBranch::Ramp);
    let v = elastic_ordinate(0.1, a_g, &p, 5.0).unwrap();
    let plateau = a_g * p.s * damping_correction(5.0) * 2.5;
    assert!(v > a_g && v < plateau, "S_e={v} plateau={plateau}");
    assert_close("S_e(0.1)", v, 0.48, 1e-12);
}

#[test]
fn same_period_is_on_plateau_for_type2_soil_b() {
    // T_B = 0.05 < 0.1 ≤ T_C = 0.25
    let p = GroundType::B.params(SpectrumType::Type2);
    assert_eq!(p.branch(0.1), SpectrumBranch::ConstantAcceleration);
    assert_close(
        "S_e plateau",
        elastic_ordinate(0.1, 0.2, &p, 5.0).unwrap(),
        0.2 * 1.35 * 2.5,
        1e-12,
    );
}

#[test]
fn row_branch_matches_explicit_breakpoints() {
    let p = GroundType::C.params(SpectrumType::Type1);
    for t in [0.0, p.t_b, p.t_b + 1e-6, p.t_c, p.t_d, 3.5] {
        assert_eq!(p.branch(t), branch(t, p.t_b, p.t_c, p.t_d), "T={t}");
    }
    assert_eq!(p.branch(p.t_b), SpectrumBranch::Ramp);
    assert_eq!(p.branch(p.t_d), SpectrumBranch::ConstantVelocity);
}

#[test]
fn nan_period_is_out_of_range() {
    let p = GroundType::B.params(SpectrumType::Type2);
    let err = elastic_ordinate(f64::NAN, 0.2, &p, 5.0).unwrap_err();
    assert!(matches!(err, SpectrumError::PeriodOutOfRange { period, .. } if period.is_nan()));
    let vp = vertical_params(NationalAnnex::Recommended, SpectrumType::Type1).unwrap();
    assert!(vertical_ordinate(f64::NAN, 0.2, &vp, 5.0).is_err());
}

#[test]
fn damping_correction_has_lower_bound() {
    assert_close("eta(10)", damping_correction(10.0), (10.0f64 / 15.0).sqrt(), 1e-12);
    assert_eq!(damping_correction(50.0), 0.55);
}

#[test]
fn design_spectrum_defaults_via_options() {
    let opts = SpectrumOptions::default();
    assert_eq!(opts.ground_type, GroundType::B);
    assert_eq!(opts.spectrum_type, SpectrumType::Type2);
    // T = 3 s, q = 1 → S 2.5 T_C T_D / T² = 1.35*2.5*0.25*1.2/9 = 0.1125 < β
    assert_close("S_d floor", opts.design(3.0, 1.0), 0.2, 1e-12);
}

#[test]
fn lateral_force_uses_reduction_for_tall_short_period_buildings() {
    let params = GroundType::C.params(SpectrumType::Type1);
    let result = compute_lateral_force(LateralForceInput {
        a_g: 0.25 * 9.80665,
        params,
        behaviour_factor: 3.9,
        lower_bound_factor: 0.2,
        c_t: CT_CONCRETE_MOMENT_FRAME,
        height_m: 15.0,
        mass_t: 2_000.0,
        storeys: 5,
    });
    // T_1 = 0.075 * 15^0.75 ≈ 0.570 s ≤ 2 T_C
    assert_close("T1", result.period_s, 0.075 * 15f64.powf(0.75), 1e-12);
    assert_eq!(result.correction_factor, 0.85);
    let expected_sd = design_ordinate(result.period_s, 0.25 * 9.80665, &params, 3.9, 0.2);
    assert_close(
        "Fb",
        result.base_shear_kn,
        expected_sd * 2_000.0 * 0.85,
        1e-9,
    );
    assert!(result.warnings.is_empty());
}

#[test]
fn lateral_force_warns_when_period_too_long() {
    let result = compute_lateral_force(LateralForceInput {
        a_g: 1.0,
        params: GroundType::A.params(SpectrumType::Type2),
        behaviour_factor: 1.5,
        lower_bound_factor: 0.2,
        c_t: 0.085,
        height_m: 80.0,
        mass_t: 1.0,
        storeys: 20,
    });
    assert_eq!(result.correction_factor, 1.0);
    assert_eq!(result.warnings.len(), 1);
}

fn any_spectrum_type() -> impl Strategy<Value = SpectrumType> {
    prop_oneof![Just(SpectrumType::Type1), Just(SpectrumType::Type2)]
}

fn any_ground_type() -> impl Strategy<Value = GroundType> {
    prop::sample::select(GroundType::ALL.to_vec())
}

proptest! {
    #[test]
    fn design_ordinate_never_below_floor_after_t_c(
        ground in any_ground_type(),
        st in any_spectrum_type(),
        a_g in 0.0f64..10.0,
        q in 1.0f64..8.0,
        beta in 0.0f64..0.5,
        extra in 0.0001f64..6.0,
    ) {
        let p = ground.params(st);
        let period = p.t_c + extra;
        let v = design_ordinate(period, a_g, &p, q, beta);
        prop_assert!(v >= a_g * beta, "S_d={} floor={}", v, a_g * beta);
    }

    #[test]
    fn elastic_is_defined_up_to_limit(
        ground in any_ground_type(),
        st in any_spectrum_type(),
        period in 0.0f64..=4.0,
    ) {
        prop_assert!(elastic_ordinate(period, 0.2, &ground.params(st), 5.0).is_ok());
    }
}
