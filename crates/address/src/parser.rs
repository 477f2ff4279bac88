//! A `nom`-based parser for the address-token grammar.

use crate::ast::Address;
use crate::error::AddressError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, u64 as nom_u64},
    combinator::{map, opt},
    sequence::separated_pair,
};

/// Parse one address token.
///
/// The whole token must be consumed; tokens mixing `-` and `:` are
/// rejected up front rather than guessing which separator wins.
pub fn parse_address(token: &str) -> Result<Address, AddressError> {
    if token.contains('-') && token.contains(':') {
        return Err(AddressError::Ambiguous(token.to_string()));
    }
    match address(token) {
        Ok(("", address)) => Ok(address),
        Ok((remainder, _)) => Err(AddressError::Malformed {
            token: token.to_string(),
            detail: format!("trailing input '{}'", remainder),
        }),
        Err(e) => Err(AddressError::Malformed {
            token: token.to_string(),
            detail: e.to_string(),
        }),
    }
}

// --- Combinators ---

fn address(input: &str) -> IResult<&str, Address> {
    alt((
        map(tag("all"), |_| Address::All),
        inline_range,
        block_range,
        map(index, Address::Index),
    ))
    .parse(input)
}

fn index(input: &str) -> IResult<&str, usize> {
    map(nom_u64, |n| n as usize).parse(input)
}

fn inline_range(input: &str) -> IResult<&str, Address> {
    map(
        separated_pair(opt(index), char(':'), opt(index)),
        |(start, end)| Address::Range {
            start,
            end,
            inline: true,
        },
    )
    .parse(input)
}

fn block_range(input: &str) -> IResult<&str, Address> {
    map(
        separated_pair(opt(index), char('-'), opt(index)),
        |(start, end)| Address::Range {
            start,
            end,
            inline: false,
        },
    )
    .parse(input)
}
