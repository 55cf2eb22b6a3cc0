use expr_eval::{evaluate_traced, format_number, Evaluation, DEFAULT_PRECISION};
use wasm_bindgen::prelude::*;

const EMPTY_INPUT: &str = "Please enter an expression.";

/// The text shown under the input box: the result, or why there is none.
#[wasm_bindgen]
pub fn evaluate(expr: &str) -> String {
    if expr.trim().is_empty() {
        return EMPTY_INPUT.to_owned();
    }
    match evaluate_traced(expr) {
        Ok(Evaluation { value, .. }) => format_number(value, DEFAULT_PRECISION),
        Err(diag) => format!("Syntax error: {diag}"),
    }
}

/// One line per reduction, followed by the result.
#[wasm_bindgen]
pub fn evaluate_steps(expr: &str) -> String {
    if expr.trim().is_empty() {
        return EMPTY_INPUT.to_owned();
    }
    match evaluate_traced(expr) {
        Ok(evaluation) => {
            let mut lines: Vec<String> = evaluation
                .steps
                .iter()
                .map(|step| format!("Step: {step}"))
                .collect();
            lines.push(format!(
                "Final Result: {}",
                format_number(evaluation.value, DEFAULT_PRECISION)
            ));
            lines.join("\n")
        }
        Err(diag) => format!("Syntax error: {diag}"),
    }
}

#[cfg(test)]
mod web_tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn evaluate_text() {
        expect!["20"].assert_eq(&evaluate("(2 + 3) * 4"));
        expect!["-inf"].assert_eq(&evaluate("-1 / 0"));
        expect!["Syntax error: Unexpected token here. A binary operator like + may be preferred. (at 3)"]
            .assert_eq(&evaluate("2 2"));
    }

    #[test]
    fn evaluate_steps_text() {
        expect![[r#"
            Step: number = 3
            Step: number = 4
            Step: number = 2
            Step: 4 * 2 = 8
            Step: 3 + 8 = 11
            Final Result: 11"#]]
        .assert_eq(&evaluate_steps("3 + 4 * 2"));
        expect!["Syntax error: Expected a number or '(' but the expression ended. (at end)"]
            .assert_eq(&evaluate_steps("2 +"));
    }

    #[test]
    fn blank_input() {
        for blank in ["", "   ", "\t\n"] {
            expect!["Please enter an expression."].assert_eq(&evaluate(blank));
            expect!["Please enter an expression."].assert_eq(&evaluate_steps(blank));
        }
        // Only truly blank input is special; a tab inside an expression is still an error.
        expect![[r#"Syntax error: Unrecognized character '\t'. (at 2)"#]]
            .assert_eq(&evaluate("1\t"));
    }
}
