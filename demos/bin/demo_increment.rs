//! Register Increment Demo
//!
//! Adds a classical constant to a quantum register with the phase-domain
//! increment and checks the result on the statevector simulator.

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use phasekit_demos::increment::{IncrementDemo, Ordering};
use phasekit_demos::{print_failure, print_header, print_result, print_section, print_success};
use phasekit_sim::SimulatorConfig;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderingArg {
    Le,
    Be,
}

#[derive(Parser, Debug)]
#[command(name = "demo-increment")]
#[command(about = "Add a constant to a quantum register via the QFT")]
struct Args {
    /// Register width in qubits
    #[arg(short = 'n', long, default_value = "3")]
    width: u32,

    /// Initial register value
    #[arg(short = 'x', long, default_value = "5")]
    value: u64,

    /// Constant to add
    #[arg(short, long, default_value = "3")]
    amount: u64,

    /// Register ordering
    #[arg(long, value_enum, default_value = "le")]
    ordering: OrderingArg,

    /// Subtract instead of add
    #[arg(long)]
    adjoint: bool,

    /// Gate the increment on a control qubit in |1⟩
    #[arg(long)]
    controlled: bool,

    /// Simulator qubit limit
    #[arg(long, env = "PHASEKIT_MAX_QUBITS", default_value = "20")]
    max_qubits: u32,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let demo = IncrementDemo {
        width: args.width,
        value: args.value,
        amount: args.amount,
        ordering: match args.ordering {
            OrderingArg::Le => Ordering::LittleEndian,
            OrderingArg::Be => Ordering::BigEndian,
        },
        adjoint: args.adjoint,
        controlled: args.controlled,
    };
    let config = SimulatorConfig::default().with_max_qubits(args.max_qubits);
    let report = demo.run(config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_header("Register Increment Demo");

    print_section("Problem Setup");
    print_result("Register width", demo.width);
    print_result("Ordering", format!("{:?}", demo.ordering));
    print_result("Initial value", demo.value);
    let op = if demo.adjoint { "-" } else { "+" };
    print_result(
        "Operation",
        format!("{} {op} {} (mod 2^{})", demo.value, demo.amount, demo.width),
    );
    print_result("Controlled", demo.controlled);

    print_section("Circuit");
    print_result("Instructions", report.num_ops);
    print_result("Controlled instructions", report.num_controlled_ops);
    print_result("Depth", report.depth);

    print_section("Result");
    print_result("Expected", report.expected);
    print_result("Measured", report.measured);
    print_result("Probability", format!("{:.6}", report.probability));

    println!();
    if report.measured == report.expected {
        print_success("Increment verified");
        Ok(())
    } else {
        print_failure("Increment mismatch");
        anyhow::bail!(
            "expected {}, simulator reported {}",
            report.expected,
            report.measured
        )
    }
}
