//! Interactive elliptic-curve calculator over F_p, the reals and the
//! rationals. Malformed input is re-prompted; a fault escaping the
//! arithmetic core terminates the session with a single error line.

use anyhow::{anyhow, bail, Context, Result};
use structopt::StructOpt;

use chord_ec::parse::{parse_int, parse_point, parse_rational, parse_real};
use chord_ec::{validate, Curve, Domain, EcPoint};

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

#[derive(StructOpt)]
#[structopt(
    name = "chord-calc",
    about = "Point arithmetic on short Weierstrass curves y^2 = x^3 + ax + b"
)]
struct Opt {
    /// Load the curve from a JSON file instead of prompting for it.
    #[structopt(long)]
    curve: Option<PathBuf>,
    /// Domain to work in (fp, reals or rationals); skips the first prompt.
    #[structopt(long)]
    domain: Option<String>,
}

type Lines<'a> = io::Lines<io::StdinLock<'a>>;

fn main() -> Result<()> {
    let opt = Opt::from_args();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let curve = match opt.curve {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .context("malformed curve description")?
        }
        None => prompt_curve(&mut lines, opt.domain.as_deref())?,
    };
    warn_about(&curve);

    menu_loop(&mut lines, &curve)
}

fn menu_loop(lines: &mut Lines, curve: &Curve) -> Result<()> {
    let domain = curve.domain();
    loop {
        println!();
        println!("1) check whether a point is on the curve");
        println!("2) add two points");
        println!("3) multiply a point by a scalar");
        println!("4) quit");
        let choice = prompt(lines, "> ", |token| {
            let n: u32 = token
                .trim()
                .parse()
                .map_err(|_| "enter a number from 1 to 4".to_string())?;
            if (1..=4).contains(&n) {
                Ok(n)
            } else {
                Err("enter a number from 1 to 4".to_string())
            }
        })?;

        match choice {
            1 => {
                let p = prompt_point(lines, "P", domain)?;
                if curve.is_on_curve(&p)? {
                    println!("{} is on the curve", p);
                } else {
                    println!("{} is not on the curve", p);
                }
            }
            2 => {
                let p = prompt_point(lines, "P", domain)?;
                let q = prompt_point(lines, "Q", domain)?;
                println!("P + Q = {}", curve.add_points(&p, &q)?);
            }
            3 => {
                let p = prompt_point(lines, "P", domain)?;
                let n = prompt(lines, "n: ", parse_int)?;
                println!("{} * P = {}", n, curve.scalar_mul(&p, n)?);
            }
            _ => return Ok(()),
        }
    }
}

fn prompt_curve(lines: &mut Lines, preset: Option<&str>) -> Result<Curve> {
    let domain = match preset {
        Some(token) => parse_domain(token).map_err(|e| anyhow!(e))?,
        None => prompt(
            lines,
            "Domain (1 = finite field, 2 = reals, 3 = rationals): ",
            parse_domain,
        )?,
    };
    println!("Curve: y^2 = x^3 + ax + b over the {}", domain);

    let curve = match domain {
        Domain::FiniteField => {
            let a = prompt(lines, "a: ", parse_int)?;
            let b = prompt(lines, "b: ", parse_int)?;
            let p = prompt(lines, "prime modulus p: ", parse_modulus)?;
            Curve::finite_field(a, b, p)
        }
        Domain::Reals => {
            let a = prompt(lines, "a: ", parse_real)?;
            let b = prompt(lines, "b: ", parse_real)?;
            Curve::reals(a, b)
        }
        Domain::Rationals => {
            let a = prompt(lines, "a (n or n/d): ", parse_rational)?;
            let b = prompt(lines, "b (n or n/d): ", parse_rational)?;
            Curve::rationals(a, b)
        }
    };
    Ok(curve)
}

fn warn_about(curve: &Curve) {
    if !validate::nonsingular(curve) {
        println!("warning: 4a^3 + 27b^2 = 0, the curve is singular");
    }
    if let &Curve::FiniteField { p, .. } = curve {
        if p <= 3 || !validate::is_prime(p) {
            println!(
                "warning: {} is not a prime greater than 3; the group law may misbehave",
                p
            );
        }
    }
}

fn prompt_point(lines: &mut Lines, name: &str, domain: Domain) -> Result<EcPoint> {
    let message = format!("{} (x, y | O for the point at infinity): ", name);
    prompt(lines, &message, |token| parse_point(token, domain))
}

fn parse_domain(token: &str) -> Result<Domain, String> {
    match token.trim().to_ascii_lowercase().as_str() {
        "1" | "fp" | "finite" => Ok(Domain::FiniteField),
        "2" | "r" | "reals" => Ok(Domain::Reals),
        "3" | "q" | "rationals" => Ok(Domain::Rationals),
        other => Err(format!("unknown domain \"{}\"", other)),
    }
}

fn parse_modulus(token: &str) -> Result<i64, String> {
    let p = parse_int(token)?;
    if p <= 0 {
        return Err(format!("modulus must be positive, got {}", p));
    }
    Ok(p)
}

fn prompt<T, F>(lines: &mut Lines, message: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T, String>,
{
    loop {
        print!("{}", message);
        io::stdout().flush()?;
        let line = read_line(lines)?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(e) => println!("{}", e),
        }
    }
}

fn read_line(lines: &mut Lines) -> Result<String> {
    match lines.next() {
        Some(line) => Ok(line?),
        None => bail!("input ended unexpectedly"),
    }
}
