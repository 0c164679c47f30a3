//! `shoprec matrix`: print the user × product interaction counts.

use super::load_store;
use crate::error::Result;
use shoprec::recommend::{build_matrix, InteractionMatrix};
use shoprec::store::InteractionLog;
use std::fmt::Write as _;
use std::path::Path;

pub(crate) fn run(data: &Path) -> Result<()> {
    let store = load_store(data)?;
    let interactions = store.fetch_all_interactions()?;

    match build_matrix(&interactions) {
        Some(matrix) => print!("{}", render(&matrix)),
        None => println!("(no interactions)"),
    }
    Ok(())
}

/// Render the matrix with product ids as columns and user ids as rows.
pub(crate) fn render(matrix: &InteractionMatrix) -> String {
    let mut out = String::from("user");
    for product in matrix.products() {
        let _ = write!(out, "\t{product}");
    }
    out.push('\n');

    for (row, user) in matrix.users().iter().enumerate() {
        let _ = write!(out, "{user}");
        for count in matrix.counts().row_slice(row) {
            let _ = write!(out, "\t{count}");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoprec::{ProductId, UserId};

    #[test]
    fn test_render_layout() {
        let log = vec![
            (UserId(1), ProductId(2)),
            (UserId(1), ProductId(2)),
            (UserId(3), ProductId(5)),
        ];
        let matrix = build_matrix(&log).expect("non-empty log");
        assert_eq!(render(&matrix), "user\t2\t5\n1\t2\t0\n3\t0\t1\n");
    }
}
