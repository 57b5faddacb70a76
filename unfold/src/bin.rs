use tracing::Level;
use unfold::Quadrature;
use unfold_base::Result;
use unfold_eval::lambda;
use unfold_lang::Arg;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::WARN)
        .init();

    let x = Arg::<f64>::new();
    let quad = Quadrature::new(0.0, 1.0, 10_000)?;
    let area = quad.integrate(lambda(x, x * x));

    println!("output: {:.6}", area);
    Ok(())
}
