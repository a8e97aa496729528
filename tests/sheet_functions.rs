//! 스프레드시트 함수 표면 테스트. 워크북에서 쓰던 호출 형태 그대로 검증한다.
use structural_code_toolbox::seismic::{NationalAnnex, ParameterLookupError, SpectrumError};
use structural_code_toolbox::sheet_functions::*;

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.8} got {actual:.8} (diff {diff:.2e})"
    );
}

#[test]
fn coefficient_accessors_read_the_same_row() {
    assert_eq!(ec8_s("C", 1), Ok(1.15));
    assert_eq!(ec8_t_b("C", 1), Ok(0.20));
    assert_eq!(ec8_t_c("C", 1), Ok(0.6));
    assert_eq!(ec8_t_d("C", 1), Ok(2.0));
}

#[test]
fn unknown_soil_is_an_invalid_key() {
    assert!(matches!(
        ec8_s("Z", 2),
        Err(ParameterLookupError::UnknownGroundType { .. })
    ));
    assert!(matches!(
        ec8_s_e(0.5, 0.2, "Z", 5.0, 2),
        Err(SheetError::Lookup(_))
    ));
    assert!(ec8_s_d(0.5, 0.2, 1.0, "Z", 2, 0.2).is_err());
}

#[test]
fn elastic_spectrum_example_in_ramp_branch() {
    let a_g = 0.2;
    let v = ec8_s_e(0.1, a_g, "B", 5.0, 1).unwrap();
    let upper = a_g * ec8_s("B", 1).unwrap() * ec8_eta(5.0) * 2.5;
    assert!(v > a_g && v < upper, "S_e={v}");
}

#[test]
fn elastic_spectrum_out_of_range_is_reported() {
    assert!(matches!(
        ec8_s_e(4.01, 0.2, "B", 5.0, 2),
        Err(SheetError::Spectrum(SpectrumError::PeriodOutOfRange { .. }))
    ));
}

#[test]
fn design_spectrum_floor_applies_beyond_t_d() {
    // q=4, T=2 s: 1.35*2.5/4*0.25*1.2/4 ≈ 0.0633 < β=0.2
    assert_close(
        "S_d",
        ec8_s_d(2.0, 0.3, 4.0, "B", 2, 0.2).unwrap(),
        0.3 * 0.2,
        1e-12,
    );
}

#[test]
fn vertical_spectrum_rejects_bad_equation_type() {
    assert!(matches!(
        ec8_s_ve(0.1, 1.0, 5.0, 7),
        Err(SheetError::Lookup(ParameterLookupError::UnknownSpectrumType(7)))
    ));
}

#[test]
fn closed_form_helpers() {
    assert_close("d_g", ec8_d_g(0.2, 1.35, 0.25, 1.2), 0.025 * 0.2 * 1.35 * 0.25 * 1.2, 1e-15);
    assert_close("F_b", ec8_f_b(1.5, 1000.0, 0.85), 1275.0, 1e-9);
    assert_close("T_1", ec8_t_1(0.05, 16.0), 0.4, 1e-12);
}

#[test]
fn annex_aware_lookup() {
    let p = ec8_params(NationalAnnex::Malaysia, "ss", 1).unwrap();
    assert_eq!(p.s, 1.2);
}

#[test]
fn concrete_stress_cell_function() {
    assert_eq!(hk_conc_stress(0.0, 40.0), 0.0);
    assert_close("plateau", hk_conc_stress(0.003, 40.0), 0.67 * 40.0 / 1.5, 1e-12);
}

#[test]
fn omitted_arguments_fall_back_to_workbook_defaults() {
    let d = SheetDefaults::default();
    // 지반 B, 식 타입 2, ξ = 5 %, q = 1, β = 0.2
    assert_eq!(d.s_e(0.1, 0.2), ec8_s_e(0.1, 0.2, "B", 5.0, 2));
    assert_eq!(d.s_d(1.0, 0.2), ec8_s_d(1.0, 0.2, 1.0, "B", 2, 0.2));
    assert_eq!(d.s_ve(0.1, 0.2), ec8_s_ve(0.1, 0.2, 5.0, 2));
    assert_close("S_e plateau", d.s_e(0.1, 0.2).unwrap(), 0.2 * 1.35 * 2.5, 1e-12);

    let site = SheetDefaults {
        soil: "D".to_string(),
        eqtype: 1,
        ..SheetDefaults::default()
    };
    assert_eq!(site.s_e(0.5, 0.3), ec8_s_e(0.5, 0.3, "D", 5.0, 1));
}
