use super::ast::{BinOpKind, Expr, ExprKind, UnOp};

impl Expr {
    /// Renders the tree as source text with the fewest parentheses that keep its shape, so
    /// parsing the output gives back a tree of the same shape.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.write_pretty(0, &mut out);
        out
    }

    /// Writes `self`, parenthesized when its precedence is below `min_prec`.
    fn write_pretty(&self, min_prec: u8, out: &mut String) {
        match &self.kind {
            ExprKind::Number(text) => out.push_str(text),
            ExprKind::Error => out.push_str("<error>"),
            ExprKind::Unary { op, expr } => {
                let wrap = UnOp::PRECEDENCE < min_prec;
                if wrap {
                    out.push('(');
                }
                out.push_str(op.as_str());
                expr.write_pretty(UnOp::PRECEDENCE, out);
                if wrap {
                    out.push(')');
                }
            }
            ExprKind::Binary { .. } => self.write_chain(min_prec, out),
        }
    }

    /// Binary nodes are written along their left spine so long chains do not recurse.
    fn write_chain(&self, min_prec: u8, out: &mut String) {
        let (leftmost, links) = self.left_spine();

        // Each node must reach the precedence its parent demands of a left operand; the
        // outermost node answers to `min_prec`.
        let wraps: Vec<bool> = links
            .iter()
            .enumerate()
            .map(|(i, link)| {
                let required = match links.get(i + 1) {
                    Some(parent) => left_min(parent.op.kind),
                    None => min_prec,
                };
                link.op.kind.precedence() < required
            })
            .collect();

        out.extend(wraps.iter().filter(|w| **w).map(|_| '('));
        leftmost.write_pretty(left_min(links[0].op.kind), out);
        for (link, wrap) in links.iter().zip(&wraps) {
            out.push(' ');
            out.push_str(link.op.kind.as_str());
            out.push(' ');
            link.right.write_pretty(right_min(link.op.kind), out);
            if *wrap {
                out.push(')');
            }
        }
    }
}

fn left_min(op: BinOpKind) -> u8 {
    op.precedence() + u8::from(op.is_right_assoc())
}

fn right_min(op: BinOpKind) -> u8 {
    op.precedence() + u8::from(!op.is_right_assoc())
}
