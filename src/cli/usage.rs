use crate::operation::operation::Operation;

/// Multi-line usage block printed to stderr when the argument count is wrong.
pub fn usage_text(program: &str) -> String {
    let ops = Operation::ALL
        .iter()
        .map(|op| op.name())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Usage: {program} <t> <alpha> <w1> <w2> <et> [<op>]\n\
         <t> = Perceptron threshold\n\
         <alpha> = Perceptron learning rate\n\
         <w1> = Weight 1\n\
         <w2> = Weight 2\n\
         <et> = Epoch threshold (i.e. maximum epochs to attempt learning)\n\
         <op> = Perceptron operation ({ops}), defaults to NAND"
    )
}
