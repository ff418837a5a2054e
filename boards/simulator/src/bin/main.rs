#[macro_use]
extern crate log;

use std::io::Write;

use env_logger::Env;
use simulator::{Options, Session};

fn parse<T: std::str::FromStr>(matches: &clap::ArgMatches, name: &str) -> Result<Option<T>, String> {
    match matches.value_of(name) {
        Some(value) => value.parse().map(Some).map_err(|_| format!("Invalid {} {}", name, value)),
        None => Ok(None),
    }
}

fn values(matches: &clap::ArgMatches, name: &str) -> Vec<String> {
    matches.values_of(name).map(|values| values.map(String::from).collect()).unwrap_or_default()
}

fn options(matches: &clap::ArgMatches) -> Result<Options, String> {
    let default = Options::default();
    Ok(Options {
        scenario: parse(matches, "scenario")?.unwrap_or(default.scenario),
        duration: parse(matches, "duration")?.unwrap_or(default.duration),
        rate: parse(matches, "rate")?.unwrap_or(default.rate),
        report: parse(matches, "report")?.unwrap_or(default.report),
        faults: values(matches, "fault"),
        autopilot: matches.value_of("ap").map(String::from),
        settings: values(matches, "set"),
        flaps: parse(matches, "flaps")?,
        thrust: parse(matches, "thrust")?,
        pitch: parse(matches, "pitch")?,
        roll: parse(matches, "roll")?,
    })
}

fn run(matches: &clap::ArgMatches) -> Result<(), String> {
    let options = options(matches)?;
    info!("Starting from {} for {}s at {}Hz", options.scenario, options.duration, options.rate);
    let mut session = Session::new(&options)?;
    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    let lines = session.run(&mut output)?;
    output.flush().map_err(|e| e.to_string())?;
    debug!("Wrote {} telemetry lines", lines);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let arg = |name| clap::Arg::with_name(name).long(name).takes_value(true);
    let matches = clap::App::new("simulator")
        .version("0.1")
        .author("qiuchengxuan")
        .about("Fly-by-wire flight control simulator")
        .arg(arg("scenario").help("ground, cruise-10000ft or cruise-37000ft"))
        .arg(arg("duration").help("Simulated seconds"))
        .arg(arg("rate").help("Steps per second"))
        .arg(arg("report").help("Seconds between telemetry lines"))
        .arg(arg("fault").help("Inject fault, e.g. elac1-fail").multiple(true).number_of_values(1))
        .arg(arg("ap").help("Engage autopilot modes, e.g. spd,hdg,alt,vs,athr"))
        .arg(arg("set").help("Override config, e.g. envelop.alpha-max=16").multiple(true).number_of_values(1))
        .arg(arg("flaps").help("Flap lever 0, 1, 2, 3 or full"))
        .arg(arg("thrust").help("Thrust levers 0..1"))
        .arg(arg("pitch").help("Sidestick pitch -1..1"))
        .arg(arg("roll").help("Sidestick roll -1..1"))
        .get_matches();
    if let Some(error) = run(&matches).err() {
        println!("{}", error);
    }
}
