//! 단위 변환, 설정 파일, 도형/차트 데이터 보조 모듈 테스트.
use std::env;
use std::fs;

use structural_code_toolbox::config::{self, Config};
use structural_code_toolbox::conversion::{convert, parse_quantity, ConversionError};
use structural_code_toolbox::geometry::{n_gon, Point3};
use structural_code_toolbox::plot_data::{sin_blend, to_table, BLEND_SAMPLES};
use structural_code_toolbox::quantity::QuantityKind;
use structural_code_toolbox::seismic::NationalAnnex;

#[test]
fn stress_conversion_mpa_to_psi() {
    let psi = convert(QuantityKind::Stress, 1.0, "MPa", "psi").unwrap();
    assert!((psi - 145.0377).abs() < 1e-3, "psi={psi}");
}

#[test]
fn acceleration_in_g_to_si() {
    let a = convert(QuantityKind::Acceleration, 0.2, "g", "m/s2").unwrap();
    assert!((a - 1.96133).abs() < 1e-9);
}

#[test]
fn unknown_unit_and_quantity_are_reported() {
    assert_eq!(
        convert(QuantityKind::Length, 1.0, "furlong", "m"),
        Err(ConversionError::UnknownUnit("furlong".to_string()))
    );
    assert!(parse_quantity("temperature").is_err());
    assert_eq!(parse_quantity("Force"), Ok(QuantityKind::Force));
}

#[test]
fn polygon_vertices_lie_on_circle() {
    let centre = Point3::new(2.0, -1.0, 3.5);
    let pts = n_gon(centre, 2.5, 7);
    assert_eq!(pts.len(), 7);
    for p in &pts {
        assert!((p.distance_to(&centre) - 2.5).abs() < 1e-12);
        assert_eq!(p.z, 3.5);
    }
    assert_eq!(n_gon(centre, 1.0, 1).len(), 3);
}

#[test]
fn sin_blend_series_shape() {
    let s = sin_blend(0.4);
    assert_eq!(s.x.len(), BLEND_SAMPLES);
    assert_eq!(s.blend.len(), BLEND_SAMPLES);
    assert!((s.x[100] - 2.5).abs() < 1e-12);
    // x = 0 → 0.4 cos 0 + 0.6 sin 0
    assert!((s.blend[0] - 0.4).abs() < 1e-12);
    assert_eq!(s.titles[3], "0.40cos(2πx) + 0.60sin(πx)");
    assert_eq!(to_table(&s).lines().count(), BLEND_SAMPLES + 1);
}

#[test]
fn config_file_is_created_then_reloaded() {
    let dir = env::temp_dir().join(format!("sct-config-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    let _ = fs::remove_file(&path);

    let created = config::load_or_default(&path).unwrap();
    assert_eq!(created, Config::default());
    assert!(path.exists());

    let mut changed = created.clone();
    changed.national_annex = NationalAnnex::Malaysia;
    changed.save(&path).unwrap();
    let reloaded = config::load_or_default(&path).unwrap();
    assert_eq!(reloaded.national_annex, NationalAnnex::Malaysia);

    fs::remove_dir_all(&dir).unwrap();
}
