use std::io::{self, Write};

use crate::app::AppError;
use crate::concrete::{elastic_modulus, ConcreteCurve};
use crate::config::Config;
use crate::conversion;
use crate::geometry::{n_gon, Point3};
use crate::plot_data;
use crate::quantity::QuantityKind;
use crate::seismic::{
    self, spectrum_curve, GroundType, LateralForceInput, MalaysiaGroundType, NationalAnnex,
    SpectrumType,
};
use crate::units::*;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Concrete,
    Spectrum,
    SpectrumCurve,
    BaseShear,
    UnitConversion,
    Geometry,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Structural Code Toolbox ===");
    println!("1) 콘크리트 응력-변형률 (HK Code)");
    println!("2) 응답스펙트럼 (EC8)");
    println!("3) 스펙트럼 곡선 표");
    println!("4) 밑면전단력 (횡력법)");
    println!("5) 단위 변환기");
    println!("6) 도형/차트 데이터");
    println!("7) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Concrete),
            "2" => return Ok(MenuChoice::Spectrum),
            "3" => return Ok(MenuChoice::SpectrumCurve),
            "4" => return Ok(MenuChoice::BaseShear),
            "5" => return Ok(MenuChoice::UnitConversion),
            "6" => return Ok(MenuChoice::Geometry),
            "7" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 콘크리트 메뉴를 처리한다. f_cu 는 항상 MPa 로 입력받는다.
pub fn handle_concrete(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 콘크리트 응력-변형률 (HK Code 2013/2015) --");
    let f_cu = read_f64("큐브 강도 f_cu [MPa]: ")?;
    let curve = ConcreteCurve::new(f_cu);
    let unit = cfg.units.stress;
    println!(
        "E_d = {:.0} MPa, e_c0 = {:.6}, e_cu = {:.6}, f_max = {:.3} {}",
        elastic_modulus(f_cu),
        curve.peak_strain,
        curve.ultimate_strain,
        convert_stress(curve.peak_stress, StressUnit::MegaPascal, unit),
        unit.symbol()
    );
    let strain = read_f64("변형률 (예: 0.002): ")?;
    let stress = convert_stress(curve.stress_at(strain), StressUnit::MegaPascal, unit);
    println!(
        "응력: {:.3} {} ({:?})",
        stress,
        unit.symbol(),
        curve.regime(strain)
    );
    Ok(())
}

/// 응답스펙트럼 메뉴를 처리한다.
pub fn handle_spectrum(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 응답스펙트럼 (EN 1998-1 3.2.2) --");
    print_site(cfg);
    let period = read_f64("주기 T [s]: ")?;
    let a_g = read_ag(cfg)?;
    let params = cfg.spectrum_params();
    let opts = &cfg.spectrum;
    let accel = cfg.units.acceleration;

    println!(
        "구간: {:?}",
        params.branch(period)
    );
    match seismic::elastic_ordinate(period, a_g, &params, opts.damping_ratio_pct) {
        Ok(v) => println!("S_e  = {:.4} {}", from_mps2(v, accel), accel.symbol()),
        Err(e) => println!("S_e  : {e}"),
    }
    let s_d = seismic::design_ordinate(
        period,
        a_g,
        &params,
        opts.behaviour_factor,
        opts.lower_bound_factor,
    );
    println!("S_d  = {:.4} {}", from_mps2(s_d, accel), accel.symbol());
    match seismic::vertical_params(cfg.national_annex, opts.spectrum_type)
        .map_err(AppError::from)
        .and_then(|vp| {
            seismic::vertical_ordinate(period, a_g, &vp, opts.damping_ratio_pct)
                .map_err(AppError::from)
        }) {
        Ok(v) => println!("S_ve = {:.4} {}", from_mps2(v, accel), accel.symbol()),
        Err(e) => println!("S_ve : {e}"),
    }
    let d_g = seismic::design_ground_displacement(a_g, params.s, params.t_c, params.t_d);
    println!("d_g  = {:.4} m", d_g);
    Ok(())
}

/// 스펙트럼 곡선 표를 출력한다.
pub fn handle_spectrum_curve(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 스펙트럼 곡선 --");
    print_site(cfg);
    let a_g = read_ag(cfg)?;
    let t_max = read_f64("최대 주기 [s]: ")?;
    let steps = read_usize("구간 수: ")?;
    let params = cfg.spectrum_params();
    let opts = &cfg.spectrum;
    let elastic = spectrum_curve::sample(
        spectrum_curve::CurveKind::Elastic {
            params,
            damping_ratio_pct: opts.damping_ratio_pct,
        },
        a_g,
        t_max,
        steps,
    );
    let design = spectrum_curve::sample(
        spectrum_curve::CurveKind::Design {
            params,
            behaviour_factor: opts.behaviour_factor,
            lower_bound_factor: opts.lower_bound_factor,
        },
        a_g,
        t_max,
        steps,
    );
    println!("T[s]\tS_e\tS_d");
    for d in &design {
        let se = elastic
            .iter()
            .find(|e| e.period_s == d.period_s)
            .map(|e| format!("{:.4}", e.ordinate))
            .unwrap_or_else(|| "-".to_string());
        println!("{:.3}\t{}\t{:.4}", d.period_s, se, d.ordinate);
    }
    Ok(())
}

/// 횡력법 메뉴를 처리한다.
pub fn handle_base_shear(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 밑면전단력 (EN 1998-1 4.3.3.2) --");
    print_site(cfg);
    println!("구조 형식: 1=철골 모멘트 골조 2=RC 모멘트 골조 3=기타");
    let c_t = match read_line("선택: ")?.trim() {
        "1" => seismic::CT_STEEL_MOMENT_FRAME,
        "2" => seismic::CT_CONCRETE_MOMENT_FRAME,
        _ => seismic::CT_OTHER,
    };
    let length = cfg.units.length;
    let mass = cfg.units.mass;
    let force = cfg.units.force;
    let height = read_f64(&format!("건물 높이 H [{}]: ", length.symbol()))?;
    let mass_value = read_f64(&format!("지진 질량 [{}]: ", mass.symbol()))?;
    let storeys = read_usize("층수: ")?;
    let a_g = read_ag(cfg)?;
    let input = LateralForceInput {
        a_g,
        params: cfg.spectrum_params(),
        behaviour_factor: cfg.spectrum.behaviour_factor,
        lower_bound_factor: cfg.spectrum.lower_bound_factor,
        c_t,
        height_m: convert_length(height, length, LengthUnit::Meter),
        mass_t: convert_mass(mass_value, mass, MassUnit::Tonne),
        storeys: u32::try_from(storeys)
            .map_err(|_| AppError::InvalidInput(format!("층수 {storeys}")))?,
    };
    let result = seismic::compute_lateral_force(input);
    println!(
        "T_1 = {:.3} s, S_d = {:.4} m/s², λ = {:.2}",
        result.period_s, result.design_ordinate, result.correction_factor
    );
    println!(
        "F_b = {:.1} {}",
        convert_force(result.base_shear_kn, ForceUnit::KiloNewton, force),
        force.symbol()
    );
    for w in &result.warnings {
        println!("경고: {w}");
    }
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(_cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 단위 변환 --");
    println!("1) 응력  2) 가속도  3) 길이  4) 질량  5) 힘");
    let kind = loop {
        let sel = read_line("항목 번호를 입력: ")?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if let Some(kind) = n.checked_sub(1).and_then(|i| QuantityKind::ALL.get(i)) {
                break *kind;
            }
        }
        println!("지원하지 않는 번호입니다.");
    };
    let value = read_f64("값 입력: ")?;
    let from_unit = read_line("입력 단위(ex: MPa, g, m, t, kN): ")?;
    let to_unit = read_line("변환 단위(ex: psi, m/s2, ft, kg, kip): ")?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!("변환 결과: {result} {}", to_unit.trim());
    Ok(())
}

/// 정다각형 꼭짓점과 sin-blend 차트 데이터를 출력한다.
pub fn handle_geometry(_cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 도형/차트 데이터 --");
    println!("1) 정다각형 꼭짓점  2) sin/cos 혼합 곡선");
    match read_line("선택: ")?.trim() {
        "1" => {
            let x = read_f64("중심 x: ")?;
            let y = read_f64("중심 y: ")?;
            let z = read_f64("중심 z: ")?;
            let radius = read_f64("반지름: ")?;
            let sides = read_usize("변의 수(최소 3): ")?;
            for (i, p) in n_gon(Point3::new(x, y, z), radius, sides).iter().enumerate() {
                println!("{i}: ({:.4}, {:.4}, {:.4})", p.x, p.y, p.z);
            }
        }
        "2" => {
            let mu = read_f64("혼합 계수 mu (0.0 - 1.0): ")?;
            println!("{}", plot_data::to_table(&plot_data::sin_blend(mu)));
        }
        _ => println!("잘못된 선택입니다."),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    print_site(cfg);
    println!("1) 국가부속서  2) 지반 분류  3) 스펙트럼 타입  4) 감쇠비  5) 거동계수 q  6) 하한계수 β  7) 가속도 단위");
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    let key = sel.trim();
    if key.is_empty() {
        return Ok(());
    }
    let Some(prompt) = setting_prompt(cfg, key) else {
        println!("잘못된 입력이므로 변경하지 않습니다.");
        return Ok(());
    };
    let value = read_line(&prompt)?;
    apply_setting(cfg, key, &value)?;
    print_site(cfg);
    Ok(())
}

fn setting_prompt(cfg: &Config, key: &str) -> Option<String> {
    let prompt = match key {
        "1" => "recommended / malaysia: ".to_string(),
        "2" => format!(
            "지반 분류 ({}): ",
            seismic::ground_labels(cfg.national_annex).join("/")
        ),
        "3" => "스펙트럼 타입 (1/2): ".to_string(),
        "4" => "감쇠비 ξ [%]: ".to_string(),
        "5" => "거동계수 q: ".to_string(),
        "6" => "하한계수 β: ".to_string(),
        "7" => "가속도 단위 (m/s2, g, gal, ft/s2): ".to_string(),
        _ => return None,
    };
    Some(prompt)
}

/// 설정 항목 하나를 입력값으로 바꾼다. 실패하면 설정은 바뀌지 않는다.
pub fn apply_setting(cfg: &mut Config, key: &str, value: &str) -> Result<(), AppError> {
    let value = value.trim();
    match key {
        "1" => {
            cfg.national_annex = value
                .parse::<NationalAnnex>()
                .map_err(AppError::InvalidInput)?;
        }
        "2" => match cfg.national_annex {
            NationalAnnex::Recommended => {
                cfg.spectrum.ground_type = value.parse::<GroundType>()?;
            }
            NationalAnnex::Malaysia => {
                cfg.malaysia_ground = value.parse::<MalaysiaGroundType>()?;
            }
        },
        "3" => {
            let n = value
                .parse::<u8>()
                .map_err(|_| AppError::InvalidInput(format!("스펙트럼 타입 '{value}'")))?;
            cfg.spectrum.spectrum_type = SpectrumType::try_from(n)?;
        }
        "4" => cfg.spectrum.damping_ratio_pct = parse_number(value)?,
        "5" => cfg.spectrum.behaviour_factor = parse_number(value)?,
        "6" => cfg.spectrum.lower_bound_factor = parse_number(value)?,
        "7" => cfg.units.acceleration = conversion::parse_acceleration_unit(value)?,
        other => return Err(AppError::InvalidInput(format!("설정 번호 '{other}'"))),
    }
    Ok(())
}

fn parse_number(value: &str) -> Result<f64, AppError> {
    value
        .parse::<f64>()
        .map_err(|_| AppError::InvalidInput(format!("숫자가 아닙니다: '{value}'")))
}

fn print_site(cfg: &Config) {
    let p = cfg.spectrum_params();
    println!(
        "[{}] 지반 {} / {} / ξ={}% q={} β={} → S={} T_B={} T_C={} T_D={}",
        cfg.national_annex,
        cfg.ground_label(),
        cfg.spectrum.spectrum_type,
        cfg.spectrum.damping_ratio_pct,
        cfg.spectrum.behaviour_factor,
        cfg.spectrum.lower_bound_factor,
        p.s,
        p.t_b,
        p.t_c,
        p.t_d
    );
}

/// 설정된 가속도 단위로 a_g 를 받아 m/s² 로 돌려준다.
fn read_ag(cfg: &Config) -> Result<f64, AppError> {
    let unit = cfg.units.acceleration;
    let v = read_f64(&format!("설계 지반가속도 a_g [{}]: ", unit.symbol()))?;
    Ok(convert_acceleration(
        v,
        unit,
        AccelerationUnit::MeterPerSecondSquared,
    ))
}

fn from_mps2(value: f64, unit: AccelerationUnit) -> f64 {
    convert_acceleration(value, AccelerationUnit::MeterPerSecondSquared, unit)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "표준 입력이 닫혔습니다",
        )));
    }
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

fn read_usize(prompt: &str) -> Result<usize, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<usize>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("0 이상의 정수를 입력하세요."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ground_label_leaves_config_untouched() {
        let mut cfg = Config::default();
        let before = cfg.clone();
        let err = apply_setting(&mut cfg, "2", "Z\n").unwrap_err();
        assert!(matches!(err, AppError::Lookup(_)), "{err:?}");
        assert!(!err.is_fatal());
        assert_eq!(cfg, before);
    }

    #[test]
    fn bad_annex_and_spectrum_type_are_recoverable() {
        let mut cfg = Config::default();
        let before = cfg.clone();
        for (key, value) in [("1", "nowhere"), ("3", "7"), ("3", "x"), ("4", "abc"), ("9", "1")] {
            let err = apply_setting(&mut cfg, key, value).unwrap_err();
            assert!(!err.is_fatal(), "{key}={value}: {err}");
        }
        assert_eq!(cfg, before);
    }

    #[test]
    fn valid_settings_are_applied() {
        let mut cfg = Config::default();
        apply_setting(&mut cfg, "1", "Malaysia\n").unwrap();
        apply_setting(&mut cfg, "2", " fs ").unwrap();
        apply_setting(&mut cfg, "3", "1").unwrap();
        apply_setting(&mut cfg, "5", "3.9").unwrap();
        assert_eq!(cfg.national_annex, NationalAnnex::Malaysia);
        assert_eq!(cfg.malaysia_ground, MalaysiaGroundType::FS);
        assert_eq!(cfg.spectrum.spectrum_type, SpectrumType::Type1);
        assert_eq!(cfg.spectrum.behaviour_factor, 3.9);
    }
}
