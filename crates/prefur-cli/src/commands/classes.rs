use crate::cli::ClassesArgs;
use crate::error::Result;
use prefur::core::models::class::StructuralClass;
use prefur::core::thermo::params::ModelParameters;

fn render(parameters: &ModelParameters) -> String {
    let mut out = format!(
        "{:<6} {:<12} {:>14} {:>17}\n",
        "Label", "Class", "Local (kJ/mol)", "Nonlocal (kJ/mol)"
    );
    for class in StructuralClass::ALL {
        let coefficients = parameters.enthalpy_for(class);
        out.push_str(&format!(
            "{:<6} {:<12} {:>14.3} {:>17.3}\n",
            class.label(),
            class.name(),
            coefficients.local,
            coefficients.nonlocal
        ));
    }
    out
}

pub fn run(args: ClassesArgs) -> Result<()> {
    let parameters = match &args.parameters {
        Some(path) => ModelParameters::load(path)?,
        None => ModelParameters::default(),
    };
    print!("{}", render(&parameters));
    Ok(())
}
