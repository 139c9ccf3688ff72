//! STL verification oracles — parse exported text back into facets and
//! return pass/fail verdicts with diagnostic detail, not panics.

use crate::helpers::HarnessError;

/// One parsed facet block.
#[derive(Debug, Clone, PartialEq)]
pub struct StlFacet {
    pub normal: [f32; 3],
    pub vertices: [[f32; 3]; 3],
}

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
        }
    }
}

/// Parse an ASCII STL document, enforcing the exact block structure the
/// serializer emits: `solid <name>` header, per facet a normal line, an
/// `outer loop` with exactly three vertices, `endloop`, `endfacet`, and
/// a final `endsolid <name>`.
pub fn parse_ascii_stl(text: &str) -> Result<(String, Vec<StlFacet>), HarnessError> {
    let mut lines = text.lines().enumerate();

    let (n, first) = lines
        .next()
        .ok_or_else(|| parse_error(0, "empty document"))?;
    let name = first
        .strip_prefix("solid ")
        .ok_or_else(|| parse_error(n + 1, "expected 'solid <name>'"))?
        .to_string();

    let mut facets = Vec::new();
    loop {
        let (n, line) = lines
            .next()
            .ok_or_else(|| parse_error(0, "missing endsolid"))?;
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix("endsolid ") {
            if rest != name {
                return Err(parse_error(n + 1, "endsolid name mismatch"));
            }
            if lines.next().is_some() {
                return Err(parse_error(n + 2, "content after endsolid"));
            }
            return Ok((name, facets));
        }

        let normal = parse_triplet(trimmed, "facet normal", n)?;
        expect_line(&mut lines, "outer loop")?;
        let mut vertices = [[0.0f32; 3]; 3];
        for v in &mut vertices {
            let (vn, vline) = lines
                .next()
                .ok_or_else(|| parse_error(0, "truncated facet"))?;
            *v = parse_triplet(vline.trim(), "vertex", vn)?;
        }
        expect_line(&mut lines, "endloop")?;
        expect_line(&mut lines, "endfacet")?;
        facets.push(StlFacet { normal, vertices });
    }
}

fn parse_error(line: usize, detail: &str) -> HarnessError {
    HarnessError::StlParse {
        line,
        detail: detail.to_string(),
    }
}

fn expect_line<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    expected: &str,
) -> Result<(), HarnessError> {
    let (n, line) = lines
        .next()
        .ok_or_else(|| parse_error(0, "truncated facet"))?;
    if line.trim() != expected {
        return Err(parse_error(n + 1, &format!("expected '{expected}'")));
    }
    Ok(())
}

fn parse_triplet(line: &str, keyword: &str, n: usize) -> Result<[f32; 3], HarnessError> {
    let rest = line
        .strip_prefix(keyword)
        .ok_or_else(|| parse_error(n + 1, &format!("expected '{keyword} <x> <y> <z>'")))?;
    let fields: Vec<f32> = rest
        .split_whitespace()
        .map(|f| f.parse::<f32>())
        .collect::<Result<_, _>>()
        .map_err(|e| parse_error(n + 1, &format!("bad float: {e}")))?;
    if fields.len() != 3 {
        return Err(parse_error(n + 1, "expected three numeric fields"));
    }
    Ok([fields[0], fields[1], fields[2]])
}

// ── Oracles ─────────────────────────────────────────────────────────────────

/// Check that every facet normal is unit length within tolerance, or
/// exactly zero (degenerate facets).
pub fn check_normal_magnitudes(facets: &[StlFacet], tol: f32) -> OracleVerdict {
    let name = "normal_magnitudes";
    for (i, facet) in facets.iter().enumerate() {
        let [nx, ny, nz] = facet.normal;
        let mag = (nx * nx + ny * ny + nz * nz).sqrt();
        if mag != 0.0 && (mag - 1.0).abs() > tol {
            return OracleVerdict::fail(
                name,
                format!("facet {i}: |normal| = {mag}, expected 1 or exactly 0"),
            );
        }
    }
    OracleVerdict::pass(name, format!("{} facets checked", facets.len()))
}

/// Check that every vertex coordinate is finite.
pub fn check_finite_coordinates(facets: &[StlFacet]) -> OracleVerdict {
    let name = "finite_coordinates";
    for (i, facet) in facets.iter().enumerate() {
        for v in &facet.vertices {
            if v.iter().any(|c| !c.is_finite()) {
                return OracleVerdict::fail(name, format!("facet {i}: non-finite vertex {v:?}"));
            }
        }
    }
    OracleVerdict::pass(name, format!("{} facets checked", facets.len()))
}
