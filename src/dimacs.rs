use std::fs;
use std::str::FromStr;

use bit_set::BitSet;
use log::{debug, warn};
use nom::IResult;
use nom::bytes::complete::tag;
use nom::character::complete::{alpha1, digit1, space0, space1};
use nom::combinator::{all_consuming, map_res};
use nom::sequence::{preceded, separated_pair, terminated, tuple};

use crate::error::{ConfigError, Error, GraphError, ParseError};
use crate::instance::{GraphInstance, VertexId};


/** models a graph read from a DIMACS file.  */
#[derive(Debug)]
pub struct DimacsInstance {
    /// nb vertices
    n: usize,
    /// nb (distinct) edges
    m: usize,
    /// adj_list[i]: vertices adjacent to i, sorted, without duplicates
    adj_list: Vec<Vec<VertexId>>,
    /// adj_matrix[i]: bitset of the neighbors of i
    adj_matrix: Vec<BitSet>,
    /// degrees[i]: number of edge endpoints equal to i in the edge list
    degrees: Vec<usize>,
}

impl GraphInstance for DimacsInstance {
    fn nb_vertices(&self) -> usize { self.n }

    fn nb_edges(&self) -> usize { self.m }

    fn neighbors(&self, u:VertexId, from:VertexId) -> Vec<VertexId> {
        let l = &self.adj_list[u];
        let start = l.partition_point(|v| *v < from);
        l[start..].to_vec()
    }

    fn degree(&self, u:VertexId) -> usize { self.degrees[u] }

    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool { self.adj_matrix[u].contains(v) }
}


impl DimacsInstance {

    /** constructor using a (0-indexed) edge list.
    Duplicated edges are merged in the adjacency relation but still count in the degrees.
    */
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> Result<Self, GraphError> {
        let mut adj_matrix = vec![BitSet::default(); n];
        let mut degrees = vec![0; n];
        for &(u,v) in edges {
            for w in [u,v] {
                if w >= n { return Err(GraphError::VertexOutOfRange { vertex: w, n }); }
            }
            if u == v { return Err(GraphError::SelfLoop(u)); }
            adj_matrix[u].insert(v);
            adj_matrix[v].insert(u);
            degrees[u] += 1;
            degrees[v] += 1;
        }
        let adj_list:Vec<Vec<VertexId>> = adj_matrix.iter()
            .map(|row| row.iter().collect())
            .collect();
        let m = adj_list.iter().map(|l| l.len()).sum::<usize>() / 2; // ∑ d(v) = 2m
        Ok(Self { n, m, adj_list, adj_matrix, degrees })
    }

    /// creates an instance from a DIMACS file
    pub fn from_file(filename:&str) -> Result<Self, Error> {
        let content = fs::read_to_string(filename)
            .map_err(|source| ConfigError::UnreadableInstance { path: filename.to_string(), source })?;
        Ok(content.parse::<Self>()?)
    }
}

impl FromStr for DimacsInstance {
    type Err = ParseError;

    fn from_str(s:&str) -> Result<Self, ParseError> {
        let (n, _, edges) = read_from_str(s)?;
        Ok(Self::from_edges(n, &edges)?)
    }
}


/** a single line of a DIMACS file */
#[derive(Debug, PartialEq, Eq)]
enum DimacsLine {
    /// empty line or comment
    Ignored,
    /// p <format> <n> <m>
    Header(usize, usize),
    /// e <u> <v> (1-indexed)
    Edge(usize, usize),
}

/** reads an instance, returns (n, m, edge list). The edge list is 0-indexed and without self-loops. */
pub fn read_from_str(s:&str) -> Result<(usize, usize, Vec<(VertexId,VertexId)>), ParseError> {
    let mut header:Option<(usize,usize)> = None;
    let mut edges = Vec::new();
    let mut nb_edge_lines:usize = 0;
    for (i,raw) in s.lines().enumerate() {
        let line = i+1;
        match read_line(raw, line)? {
            DimacsLine::Ignored => {},
            DimacsLine::Header(n,m) => {
                if header.is_some() { return Err(ParseError::DuplicateHeader { line }); }
                header = Some((n,m));
            },
            DimacsLine::Edge(a,b) => {
                let (n,_) = header.ok_or(ParseError::EdgeBeforeHeader { line })?;
                for vertex in [a,b] {
                    if vertex == 0 || vertex > n {
                        return Err(ParseError::VertexOutOfRange { line, vertex, n });
                    }
                }
                nb_edge_lines += 1;
                if a == b {
                    warn!("line {}: ignoring self-loop on vertex {}", line, a);
                } else {
                    edges.push((a-1, b-1));
                }
            },
        }
    }
    let (n,m) = header.ok_or(ParseError::MissingHeader)?;
    if nb_edge_lines != m && 2*nb_edge_lines != m {
        warn!("problem line announces {} edges, read {}", m, nb_edge_lines);
    }
    Ok((n, m, edges))
}

/// classifies and reads a line
fn read_line(raw:&str, line:usize) -> Result<DimacsLine, ParseError> {
    let trimmed = raw.trim();
    let malformed = || ParseError::MalformedLine { line, content: raw.to_string() };
    match trimmed.chars().next() {
        None | Some('c') => Ok(DimacsLine::Ignored),
        Some('p') => read_header(trimmed)
            .map(|(_,(n,m))| DimacsLine::Header(n,m))
            .map_err(|_| malformed()),
        Some('e') => read_edge(trimmed)
            .map(|(_,(a,b))| DimacsLine::Edge(a,b))
            .map_err(|_| malformed()),
        Some(_) => {
            debug!("line {}: skipping {:?}", line, raw);
            Ok(DimacsLine::Ignored)
        }
    }
}

/// reads a non-negative integer
fn read_integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads two numbers separated by spaces, nothing may follow
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    all_consuming(terminated(separated_pair(read_integer, space1, read_integer), space0))(s)
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(tuple((tag("p"), space1, alpha1, space1)), read_two_integers)(s)
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(tuple((tag("e"), space1)), read_two_integers)(s)
}
