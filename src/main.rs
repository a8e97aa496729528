use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use structural_code_toolbox::app::{self, AppError};
use structural_code_toolbox::concrete::ConcreteCurve;
use structural_code_toolbox::config::{self, DEFAULT_CONFIG_FILE};
use structural_code_toolbox::seismic::{
    self, spectrum_curve, LateralForceInput, NationalAnnex, SpectrumType,
};
use structural_code_toolbox::{conversion, logging};

/// 구조 설계 코드 계산 도구. 서브커맨드가 없으면 대화형 메뉴를 띄운다.
#[derive(Debug, Parser)]
#[command(name = "structural_code_toolbox", version)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// debug 로그 출력
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SpectrumKind {
    Elastic,
    Design,
    Vertical,
}

/// 설정값을 덮어쓰는 스펙트럼 옵션.
#[derive(Debug, clap::Args)]
struct SiteArgs {
    /// 지반 분류 라벨 (A~E, 말레이시아 NA 는 R/SS/FS)
    #[arg(long)]
    soil: Option<String>,
    /// 스펙트럼(식) 타입 1 또는 2
    #[arg(long)]
    eqtype: Option<u8>,
    /// 감쇠비 ξ [%]
    #[arg(long)]
    xi: Option<f64>,
    /// 거동계수 q
    #[arg(long)]
    q: Option<f64>,
    /// 하한계수 β
    #[arg(long)]
    beta: Option<f64>,
    /// recommended / malaysia
    #[arg(long)]
    annex: Option<NationalAnnex>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// HK 코드 콘크리트 응력
    Concrete {
        #[arg(long)]
        fcu: f64,
        #[arg(long)]
        strain: Option<f64>,
        /// 곡선 샘플 개수
        #[arg(long)]
        points: Option<usize>,
    },
    /// 단일 주기 스펙트럼 좌표
    Spectrum {
        #[arg(long)]
        period: f64,
        #[arg(long)]
        ag: f64,
        #[arg(long, value_enum, default_value = "elastic")]
        kind: SpectrumKind,
        #[command(flatten)]
        site: SiteArgs,
    },
    /// 스펙트럼 곡선 표
    Curve {
        #[arg(long)]
        ag: f64,
        #[arg(long, default_value_t = 4.0)]
        t_max: f64,
        #[arg(long, default_value_t = 40)]
        steps: usize,
        #[arg(long, value_enum, default_value = "design")]
        kind: SpectrumKind,
        #[command(flatten)]
        site: SiteArgs,
    },
    /// 횡력법 밑면전단력 (a_g m/s², 높이 m, 질량 t → kN)
    BaseShear {
        #[arg(long)]
        ag: f64,
        #[arg(long)]
        ct: f64,
        #[arg(long)]
        height: f64,
        #[arg(long)]
        mass: f64,
        #[arg(long, default_value_t = 1)]
        storeys: u32,
        #[command(flatten)]
        site: SiteArgs,
    },
    /// 단위 변환
    Convert {
        quantity: String,
        value: f64,
        from: String,
        to: String,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    if let Err(err) = try_run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    match cli.command {
        None => app::run(&mut cfg, &cli.config)?,
        Some(command) => run_command(command, &mut cfg)?,
    }
    Ok(())
}

/// 설정에 CLI 옵션을 덮어쓴다. 저장하지는 않는다.
fn apply_site(cfg: &mut config::Config, site: &SiteArgs) -> Result<(), AppError> {
    if let Some(annex) = site.annex {
        cfg.national_annex = annex;
    }
    if let Some(n) = site.eqtype {
        cfg.spectrum.spectrum_type = SpectrumType::try_from(n)?;
    }
    if let Some(label) = &site.soil {
        match cfg.national_annex {
            NationalAnnex::Recommended => cfg.spectrum.ground_type = label.parse()?,
            NationalAnnex::Malaysia => cfg.malaysia_ground = label.parse()?,
        }
    }
    if let Some(xi) = site.xi {
        cfg.spectrum.damping_ratio_pct = xi;
    }
    if let Some(q) = site.q {
        cfg.spectrum.behaviour_factor = q;
    }
    if let Some(beta) = site.beta {
        cfg.spectrum.lower_bound_factor = beta;
    }
    Ok(())
}

fn curve_kind(
    kind: SpectrumKind,
    cfg: &config::Config,
) -> Result<spectrum_curve::CurveKind, AppError> {
    let opts = &cfg.spectrum;
    Ok(match kind {
        SpectrumKind::Elastic => spectrum_curve::CurveKind::Elastic {
            params: cfg.spectrum_params(),
            damping_ratio_pct: opts.damping_ratio_pct,
        },
        SpectrumKind::Design => spectrum_curve::CurveKind::Design {
            params: cfg.spectrum_params(),
            behaviour_factor: opts.behaviour_factor,
            lower_bound_factor: opts.lower_bound_factor,
        },
        SpectrumKind::Vertical => spectrum_curve::CurveKind::Vertical {
            params: seismic::vertical_params(cfg.national_annex, opts.spectrum_type)?,
            damping_ratio_pct: opts.damping_ratio_pct,
        },
    })
}

fn run_command(command: Command, cfg: &mut config::Config) -> Result<(), AppError> {
    match command {
        Command::Concrete {
            fcu,
            strain,
            points,
        } => {
            let curve = ConcreteCurve::new(fcu);
            println!(
                "e_c0={:.6} e_cu={:.6} f_max={:.3} MPa",
                curve.peak_strain, curve.ultimate_strain, curve.peak_stress
            );
            if let Some(strain) = strain {
                println!("stress={:.4} MPa", curve.stress_at(strain));
            }
            if let Some(points) = points {
                for (e, s) in curve.sample(points) {
                    println!("{e:.6}\t{s:.4}");
                }
            }
        }
        Command::Spectrum {
            period,
            ag,
            kind,
            site,
        } => {
            apply_site(cfg, &site)?;
            let value = match curve_kind(kind, cfg)? {
                spectrum_curve::CurveKind::Elastic {
                    params,
                    damping_ratio_pct,
                } => seismic::elastic_ordinate(period, ag, &params, damping_ratio_pct)?,
                spectrum_curve::CurveKind::Design {
                    params,
                    behaviour_factor,
                    lower_bound_factor,
                } => seismic::design_ordinate(
                    period,
                    ag,
                    &params,
                    behaviour_factor,
                    lower_bound_factor,
                ),
                spectrum_curve::CurveKind::Vertical {
                    params,
                    damping_ratio_pct,
                } => seismic::vertical_ordinate(period, ag, &params, damping_ratio_pct)?,
            };
            println!("{value:.6}");
        }
        Command::Curve {
            ag,
            t_max,
            steps,
            kind,
            site,
        } => {
            apply_site(cfg, &site)?;
            let t_max = match kind {
                SpectrumKind::Design => t_max,
                _ => spectrum_curve::elastic_t_max(t_max),
            };
            for p in spectrum_curve::sample(curve_kind(kind, cfg)?, ag, t_max, steps) {
                println!("{:.4}\t{:.6}", p.period_s, p.ordinate);
            }
        }
        Command::BaseShear {
            ag,
            ct,
            height,
            mass,
            storeys,
            site,
        } => {
            apply_site(cfg, &site)?;
            let result = seismic::compute_lateral_force(LateralForceInput {
                a_g: ag,
                params: cfg.spectrum_params(),
                behaviour_factor: cfg.spectrum.behaviour_factor,
                lower_bound_factor: cfg.spectrum.lower_bound_factor,
                c_t: ct,
                height_m: height,
                mass_t: mass,
                storeys,
            });
            println!(
                "T1={:.4} s\tSd={:.4}\tlambda={:.2}\tFb={:.2} kN",
                result.period_s,
                result.design_ordinate,
                result.correction_factor,
                result.base_shear_kn
            );
            for w in result.warnings {
                eprintln!("경고: {w}");
            }
        }
        Command::Convert {
            quantity,
            value,
            from,
            to,
        } => {
            let kind = conversion::parse_quantity(&quantity)?;
            let result = conversion::convert(kind, value, &from, &to)?;
            println!("{result} {to} ({})", kind.name());
        }
    }
    Ok(())
}
