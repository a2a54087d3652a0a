// Capture parser for NX-OS style `show ip route vrf all` output
//
// Each line is classified by a small set of independent rules (VRF header,
// prefix block header, path line, inline route line) and the parse loop folds
// the classified lines into a ParseResult. Nothing here fails: lines that look
// like route data but cannot be used become warnings.

use regex::Regex;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use super::{DEFAULT_VRF, ParseResult, ParseWarning, RouteRecord};

static RE_VRF_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bIP(?:v6)?\s+Rout(?:e|ing)\s+Table\s+for\s+VRF\s+"([^"]+)""#).unwrap()
});
// 10.7.248.0/30, ubest/mbest: 2/0
static RE_PREFIX_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+/\d+),\s+ubest/mbest:").unwrap());
// *via 10.249.16.64, eth1/54.12, [115/64], 04w00d, isis-isis_infra
static RE_PATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*{0,2}via\s").unwrap());
static RE_CIDR_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d{1,3}(?:\.\d{1,3}){3}|[0-9A-Fa-f]*:[0-9A-Fa-f:.]*)/\d{1,3}$").unwrap()
});
static RE_PREF_METRIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(\d+)/(\d+)\]$").unwrap());
static RE_INTERFACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:ethernet|eth|vlan|loopback|lo|tunnel|port-channel|po|mgmt|fastethernet|fa|gigabitethernet|gi|tengigabitethernet|te|null|nve|bdi|sup-eth)\d[\w/.:-]*$",
    )
    .unwrap()
});
static RE_PROTOCOL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:static|direct|local|connected|hmm|am|coop|bgp|ospf|ospfv3|isis|eigrp|rip|pim)(?:-\S+)?$",
    )
    .unwrap()
});
// IOS route codes in front of the prefix: "O", "O IA", "S*", "B"
static RE_IOS_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[CLSOBDRi]\*?$").unwrap());

/// Parser behaviour switches.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Drop records whose protocol contains any of these strings.
    pub exclude_protocols: Vec<String>,
    /// Collapse `vlanNN` interface names into `vlan`.
    pub normalize_vlan_interfaces: bool,
}

/// Route attributes picked out of the tokens of a line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Attributes {
    next_hop: String,
    interface: String,
    protocol: String,
    metric: Option<u32>,
    preference: Option<u32>,
    directly_connected: bool,
}

impl Attributes {
    fn is_empty(&self) -> bool {
        self.next_hop.is_empty()
            && self.interface.is_empty()
            && self.protocol.is_empty()
            && self.metric.is_none()
            && self.preference.is_none()
            && !self.directly_connected
    }
}

/// Result of classifying one line of a capture.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    VrfHeader(String),
    PrefixBlock(String),
    MalformedBlock(String),
    Path(Attributes),
    Route { prefix: String, attrs: Attributes },
    Warning(String),
    Skip,
}

#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new(mut options: ParseOptions) -> Self {
        // Extracted protocols are lower-cased, so match exclusions the same way.
        for proto in options.exclude_protocols.iter_mut() {
            *proto = proto.to_lowercase();
        }
        Parser { options }
    }

    /// Parse one capture into per-VRF route records.
    pub fn parse(&self, text: &str) -> ParseResult {
        let mut result = ParseResult::default();
        let mut vrf = DEFAULT_VRF.to_string();
        let mut block: Option<String> = None;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            match classify(raw) {
                Line::Skip => {}
                Line::VrfHeader(name) => {
                    tracing::debug!("line {}: entering VRF {}", line_no, name);
                    vrf = name;
                    block = None;
                }
                Line::PrefixBlock(prefix) => block = Some(prefix),
                Line::MalformedBlock(reason) => {
                    // Paths under a bad header must not attach to the previous prefix.
                    block = None;
                    result.warn(ParseWarning {
                        line: line_no,
                        text: raw.trim().to_string(),
                        reason,
                    });
                }
                Line::Path(attrs) => match &block {
                    Some(prefix) => {
                        let prefix = prefix.clone();
                        self.emit(&mut result, &vrf, prefix, attrs, line_no);
                    }
                    None => result.warn(ParseWarning {
                        line: line_no,
                        text: raw.trim().to_string(),
                        reason: "path line without a preceding prefix".to_string(),
                    }),
                },
                Line::Route { prefix, attrs } => {
                    block = None;
                    self.emit(&mut result, &vrf, prefix, attrs, line_no);
                }
                Line::Warning(reason) => {
                    tracing::debug!("line {}: {}", line_no, reason);
                    result.warn(ParseWarning {
                        line: line_no,
                        text: raw.trim().to_string(),
                        reason,
                    });
                }
            }
        }

        result
    }

    fn emit(
        &self,
        result: &mut ParseResult,
        vrf: &str,
        prefix: String,
        attrs: Attributes,
        line_no: usize,
    ) {
        let protocol = if attrs.protocol.is_empty() && attrs.directly_connected {
            "connected".to_string()
        } else {
            attrs.protocol
        };

        if self
            .options
            .exclude_protocols
            .iter()
            .any(|p| !p.is_empty() && protocol.contains(p.as_str()))
        {
            tracing::trace!("line {}: dropping {} route {}", line_no, protocol, prefix);
            return;
        }

        let interface = if self.options.normalize_vlan_interfaces
            && attrs.interface.to_lowercase().starts_with("vlan")
        {
            "vlan".to_string()
        } else {
            attrs.interface
        };

        let record = RouteRecord {
            vrf: vrf.to_string(),
            prefix,
            next_hop: attrs.next_hop,
            interface,
            protocol,
            metric: attrs.metric,
            preference: attrs.preference,
        };

        if result.insert(record) {
            // Later lines win for a repeated identity.
            tracing::debug!("line {}: duplicate route replaced earlier entry", line_no);
        }
    }
}

/// Parse a capture with default options.
pub fn parse(text: &str) -> ParseResult {
    Parser::default().parse(text)
}

fn classify(raw: &str) -> Line {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
        return Line::Skip;
    }

    vrf_header(line)
        .or_else(|| prefix_block(line))
        .or_else(|| path_line(line))
        .or_else(|| route_line(line))
        .unwrap_or(Line::Skip)
}

fn vrf_header(line: &str) -> Option<Line> {
    let caps = RE_VRF_HEADER.captures(line)?;
    Some(Line::VrfHeader(caps[1].to_string()))
}

fn prefix_block(line: &str) -> Option<Line> {
    let caps = RE_PREFIX_BLOCK.captures(line)?;
    let token = &caps[1];
    Some(match canonical_prefix(token) {
        Some(prefix) => Line::PrefixBlock(prefix),
        None => Line::MalformedBlock(format!("malformed prefix {}", token)),
    })
}

fn path_line(line: &str) -> Option<Line> {
    if !RE_PATH.is_match(line) {
        return None;
    }
    let tokens = tokenize(line.trim_start_matches('*'));
    let attrs = attributes(&tokens);
    if attrs.next_hop.is_empty() && attrs.interface.is_empty() {
        return Some(Line::Warning("path line without next hop or interface".to_string()));
    }
    Some(Line::Path(attrs))
}

fn route_line(line: &str) -> Option<Line> {
    let tokens = tokenize(line);
    let shaped: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| RE_CIDR_SHAPE.is_match(t))
        .map(|(i, _)| i)
        .collect();
    if shaped.is_empty() {
        return None;
    }

    let Some((pos, prefix)) = shaped
        .iter()
        .find_map(|&i| canonical_prefix(tokens[i]).map(|p| (i, p)))
    else {
        return Some(Line::Warning(format!("malformed prefix {}", tokens[shaped[0]])));
    };

    let mut attrs = attributes(&tokens[pos + 1..]);
    if attrs.is_empty() {
        return Some(Line::Warning(format!("no routing attributes after {}", prefix)));
    }
    if attrs.protocol.is_empty() {
        if let Some(code) = tokens[..pos].first().filter(|t| RE_IOS_CODE.is_match(t)) {
            attrs.protocol = ios_protocol(code).to_string();
        }
    }

    Some(Line::Route { prefix, attrs })
}

fn tokenize(line: &str) -> Vec<&str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect()
}

fn attributes(tokens: &[&str]) -> Attributes {
    let mut attrs = Attributes::default();

    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        match token.to_lowercase().as_str() {
            "via" => {
                if let Some(nh) = tokens.get(i + 1).and_then(|t| next_hop(t)) {
                    if attrs.next_hop.is_empty() {
                        attrs.next_hop = nh;
                    }
                    i += 2;
                    continue;
                }
            }
            "directly" => {
                if tokens
                    .get(i + 1)
                    .is_some_and(|t| t.eq_ignore_ascii_case("connected"))
                {
                    attrs.directly_connected = true;
                    i += 2;
                    continue;
                }
            }
            _ => {
                if let Some(caps) = RE_PREF_METRIC.captures(token) {
                    attrs.preference = caps[1].parse().ok();
                    attrs.metric = caps[2].parse().ok();
                } else if let Some(nh) = next_hop(token) {
                    if attrs.next_hop.is_empty() {
                        attrs.next_hop = nh;
                    }
                } else if RE_INTERFACE.is_match(token) {
                    if attrs.interface.is_empty() {
                        attrs.interface = token.to_string();
                    }
                } else if RE_PROTOCOL.is_match(token) && attrs.protocol.is_empty() {
                    attrs.protocol = token.trim_end_matches([',', ']']).to_lowercase();
                }
            }
        }
        i += 1;
    }

    attrs
}

/// An address, optionally followed by `%vrf` as NX-OS prints recursive next hops.
/// IPv6 next hops come as host prefixes (`2001:db8::2/128`); the length is dropped.
fn next_hop(token: &str) -> Option<String> {
    let (addr, vrf) = match token.split_once('%') {
        Some((addr, vrf)) => (addr, Some(vrf)),
        None => (token, None),
    };
    let (addr, len) = match addr.split_once('/') {
        Some((addr, len)) => (addr, Some(len)),
        None => (addr, None),
    };

    let ip: IpAddr = addr.parse().ok()?;
    let width = if ip.is_ipv4() { 32 } else { 128 };
    if let Some(len) = len {
        if len.parse::<u8>().ok()? != width {
            return None;
        }
    }

    Some(match vrf {
        Some(vrf) => format!("{}%{}", ip, vrf),
        None => ip.to_string(),
    })
}

fn ios_protocol(code: &str) -> &'static str {
    match code.chars().next() {
        Some('C') => "connected",
        Some('L') => "local",
        Some('S') => "static",
        Some('O') => "ospf",
        Some('B') => "bgp",
        Some('D') => "eigrp",
        Some('R') => "rip",
        Some('i') => "isis",
        _ => "",
    }
}

/// Normalize `addr/len` to its network address. None for malformed tokens.
fn canonical_prefix(token: &str) -> Option<String> {
    let (addr, len) = token.split_once('/')?;
    let len: u8 = len.parse().ok()?;

    match addr.parse::<IpAddr>().ok()? {
        IpAddr::V4(net) => {
            if len > 32 {
                return None;
            }
            let mask = if len == 0 { 0 } else { u32::MAX << (32 - len) };
            Some(format!("{}/{}", Ipv4Addr::from(u32::from(net) & mask), len))
        }
        IpAddr::V6(net) => {
            if len > 128 {
                return None;
            }
            let mask = if len == 0 { 0 } else { u128::MAX << (128 - len) };
            Some(format!("{}/{}", Ipv6Addr::from(u128::from(net) & mask), len))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NXOS_CAPTURE: &str = r#"Leaf-101# show ip route vrf all
IP Route Table for VRF "default"
'*' denotes best ucast next-hop
'**' denotes best mcast next-hop
'[x/y]' denotes [preference/metric]
'%<string>' in via output denotes VRF <string>

10.0.0.0/24, ubest/mbest: 1/0, attached, direct
    *via 10.0.0.1, vlan10, [0/0], 3y34w, direct
10.7.248.0/30, ubest/mbest: 2/0
    *via 10.249.16.64, eth1/54.12, [115/64], 04w00d, isis-isis_infra, isis-l1-ext
    *via 10.249.16.65, eth1/53.11, [115/64], 04w00d, isis-isis_infra, isis-l1-ext

IP Route Table for VRF "tenant:blue"
172.16.0.0/16, ubest/mbest: 1/0
    *via 10.249.248.0%overlay-1, [1/0], 28w06d, bgp-64512, internal, tag 64512
Total entries displayed: 4
"#;

    #[test]
    fn test_canonical_prefix() {
        assert_eq!(canonical_prefix("10.0.0.1/24"), Some("10.0.0.0/24".to_string()));
        assert_eq!(canonical_prefix("0.0.0.0/0"), Some("0.0.0.0/0".to_string()));
        assert_eq!(canonical_prefix("2001:db8::1/64"), Some("2001:db8::/64".to_string()));
        assert_eq!(canonical_prefix("10.0.0.0/33"), None);
        assert_eq!(canonical_prefix("10.0.0.300/24"), None);
    }

    #[test]
    fn test_classify_vrf_header() {
        assert_eq!(
            classify(r#"IP Route Table for VRF "tenant:blue""#),
            Line::VrfHeader("tenant:blue".to_string())
        );
        assert_eq!(
            classify(r#"IPv6 Routing Table for VRF "default""#),
            Line::VrfHeader("default".to_string())
        );
    }

    #[test]
    fn test_classify_noise() {
        assert_eq!(classify(""), Line::Skip);
        assert_eq!(classify("! comment 10.0.0.0/8 via 1.1.1.1"), Line::Skip);
        assert_eq!(classify("'[x/y]' denotes [preference/metric]"), Line::Skip);
        assert_eq!(classify("Leaf-101# show ip route vrf all"), Line::Skip);
        assert_eq!(classify("Total entries displayed: 12"), Line::Skip);
    }

    #[test]
    fn test_classify_path_line() {
        let line = classify("    *via 10.249.16.64, eth1/54.12, [115/64], 04w00d, isis-isis_infra, isis-l1-ext");
        assert_eq!(
            line,
            Line::Path(Attributes {
                next_hop: "10.249.16.64".to_string(),
                interface: "eth1/54.12".to_string(),
                protocol: "isis-isis_infra".to_string(),
                metric: Some(64),
                preference: Some(115),
                directly_connected: false,
            })
        );
    }

    #[test]
    fn test_classify_inline_routes() {
        match classify("10.0.0.0/24 via 10.0.0.1 Eth1/1") {
            Line::Route { prefix, attrs } => {
                assert_eq!(prefix, "10.0.0.0/24");
                assert_eq!(attrs.next_hop, "10.0.0.1");
                assert_eq!(attrs.interface, "Eth1/1");
                assert_eq!(attrs.protocol, "");
            }
            other => panic!("unexpected {:?}", other),
        }

        match classify("O 172.16.0.0/16 [110/20] via 10.0.0.1, 00:30:17, FastEthernet0/0") {
            Line::Route { prefix, attrs } => {
                assert_eq!(prefix, "172.16.0.0/16");
                assert_eq!(attrs.protocol, "ospf");
                assert_eq!(attrs.preference, Some(110));
                assert_eq!(attrs.metric, Some(20));
                assert_eq!(attrs.interface, "FastEthernet0/0");
            }
            other => panic!("unexpected {:?}", other),
        }

        match classify("C 10.1.1.0/24 is directly connected, Vlan10") {
            Line::Route { attrs, .. } => {
                assert!(attrs.directly_connected);
                assert_eq!(attrs.protocol, "connected");
                assert_eq!(attrs.interface, "Vlan10");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_classify_warnings() {
        assert!(matches!(classify("10.0.0.0/33 via 10.0.0.1"), Line::Warning(_)));
        assert!(matches!(classify("10.9.9.0/24"), Line::Warning(_)));
        assert!(matches!(
            classify("999.1.1.1/24, ubest/mbest: 1/0"),
            Line::MalformedBlock(_)
        ));
    }

    #[test]
    fn test_parse_nxos_capture() {
        let result = parse(NXOS_CAPTURE);
        assert!(result.warnings().is_empty());

        let names: Vec<&str> = result.vrf_names().collect();
        assert_eq!(names, vec!["default", "tenant:blue"]);

        let default = result.vrf("default").unwrap();
        let prefixes: Vec<&str> = default.routes().iter().map(|r| r.prefix.as_str()).collect();
        assert_eq!(prefixes, vec!["10.0.0.0/24", "10.7.248.0/30", "10.7.248.0/30"]);
        assert_eq!(default.routes()[0].protocol, "direct");
        assert_eq!(default.routes()[2].next_hop, "10.249.16.65");

        let blue = result.vrf("tenant:blue").unwrap();
        assert_eq!(blue.routes().len(), 1);
        assert_eq!(blue.routes()[0].next_hop, "10.249.248.0%overlay-1");
        assert_eq!(blue.routes()[0].protocol, "bgp-64512");
        assert_eq!(blue.routes()[0].interface, "");
    }

    #[test]
    fn test_parse_empty_input() {
        let result = parse("");
        assert!(result.is_empty());
        assert!(result.warnings().is_empty());
        assert_eq!(result.vrf_names().count(), 0);
    }

    #[test]
    fn test_routes_without_header_use_default_vrf() {
        let result = parse("10.0.0.0/24 via 10.0.0.1 Eth1/1\n10.0.1.0/24 via 10.0.1.1 Eth1/2\n");
        let names: Vec<&str> = result.vrf_names().collect();
        assert_eq!(names, vec![DEFAULT_VRF]);
        assert_eq!(result.route_count(), 2);
    }

    #[test]
    fn test_duplicate_identity_last_write_wins() {
        let text = "S 10.0.0.0/24 [1/5] via 10.0.0.1, Eth1/1\n\
                    S 10.0.1.0/24 [1/0] via 10.0.0.1, Eth1/1\n\
                    O 10.0.0.0/24 [110/9] via 10.0.0.1, Eth1/1\n";
        let result = parse(text);
        let routes = result.vrf(DEFAULT_VRF).unwrap().routes();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].prefix, "10.0.0.0/24");
        assert_eq!(routes[0].protocol, "ospf");
        assert_eq!(routes[0].metric, Some(9));
        assert_eq!(routes[1].prefix, "10.0.1.0/24");
    }

    #[test]
    fn test_warnings_carry_line_numbers() {
        let text = "garbage\n    *via 10.0.0.1, eth1/1, [1/0], 1d, static\n10.0.0.0/40 via 1.1.1.1\n";
        let result = parse(text);
        assert!(result.is_empty());
        let lines: Vec<usize> = result.warnings().iter().map(|w| w.line).collect();
        assert_eq!(lines, vec![2, 3]);
        assert_eq!(result.warnings()[1].text, "10.0.0.0/40 via 1.1.1.1");
    }

    #[test]
    fn test_vrf_header_clears_prefix_block() {
        let text = "10.0.0.0/24, ubest/mbest: 1/0\nIP Route Table for VRF \"red\"\n  *via 10.0.0.1, eth1/1, [1/0], 1d, static\n";
        let result = parse(text);
        assert!(result.is_empty());
        assert_eq!(result.warnings().len(), 1);
    }

    #[test]
    fn test_exclude_protocols() {
        let parser = Parser::new(ParseOptions {
            exclude_protocols: vec!["isis-isis_infra".to_string()],
            ..Default::default()
        });
        let result = parser.parse(NXOS_CAPTURE);
        assert_eq!(result.vrf("default").unwrap().routes().len(), 1);
        assert_eq!(result.route_count(), 2);
    }

    #[test]
    fn test_normalize_vlan_interfaces() {
        let parser = Parser::new(ParseOptions {
            normalize_vlan_interfaces: true,
            ..Default::default()
        });
        let result = parser.parse(NXOS_CAPTURE);
        assert_eq!(result.vrf("default").unwrap().routes()[0].interface, "vlan");
        assert_eq!(result.vrf("default").unwrap().routes()[1].interface, "eth1/54.12");
    }

    #[test]
    fn test_malformed_block_header_drops_its_paths() {
        let text = "10.0.0.0/24, ubest/mbest: 1/0\n\
                    \x20   *via 1.1.1.1, eth1/1, [1/0], 1d, static\n\
                    999.0.0.0/24, ubest/mbest: 1/0\n\
                    \x20   *via 2.2.2.2, eth1/2, [1/0], 1d, static\n\
                    10.0.0.0/33, ubest/mbest: 1/0\n\
                    \x20   *via 3.3.3.3, eth1/3, [1/0], 1d, static\n";
        let result = parse(text);

        let routes = result.vrf(DEFAULT_VRF).unwrap().routes();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].next_hop, "1.1.1.1");

        let lines: Vec<usize> = result.warnings().iter().map(|w| w.line).collect();
        assert_eq!(lines, vec![3, 4, 5, 6]);
        assert_eq!(result.warnings()[1].reason, "path line without a preceding prefix");
    }

    #[test]
    fn test_ipv6_block_keeps_host_next_hops() {
        let text = r#"IPv6 Routing Table for VRF "default"
2001:db8:10::/64, ubest/mbest: 2/0
    *via 2001:db8:1::2/128, Eth1/1, [1/0], 1d, static
    *via 2001:db8:1::3/128, Eth1/1, [1/0], 1d, static
"#;
        let result = parse(text);
        assert!(result.warnings().is_empty());

        let routes = result.vrf("default").unwrap().routes();
        let hops: Vec<&str> = routes.iter().map(|r| r.next_hop.as_str()).collect();
        assert_eq!(hops, vec!["2001:db8:1::2", "2001:db8:1::3"]);
        assert_eq!(routes[0].prefix, "2001:db8:10::/64");
        assert_eq!(routes[0].interface, "Eth1/1");
    }

    #[test]
    fn test_next_hop_forms() {
        assert_eq!(next_hop("10.0.0.1"), Some("10.0.0.1".to_string()));
        assert_eq!(next_hop("10.0.0.1/32"), Some("10.0.0.1".to_string()));
        assert_eq!(next_hop("10.249.248.0%overlay-1"), Some("10.249.248.0%overlay-1".to_string()));
        assert_eq!(next_hop("2001:db8::2/128"), Some("2001:db8::2".to_string()));
        assert_eq!(next_hop("2001:db8::/64"), None);
        assert_eq!(next_hop("64512"), None);
    }

    #[test]
    fn test_exclude_protocols_ignores_case() {
        let parser = Parser::new(ParseOptions {
            exclude_protocols: vec!["ISIS".to_string()],
            ..Default::default()
        });
        let result = parser.parse(NXOS_CAPTURE);
        assert_eq!(result.vrf("default").unwrap().routes().len(), 1);
    }

    #[test]
    fn test_leading_word_is_not_an_ios_code() {
        match classify("is 10.0.0.0/24 via 10.0.0.1") {
            Line::Route { attrs, .. } => assert_eq!(attrs.protocol, ""),
            other => panic!("unexpected {:?}", other),
        }
        match classify("S* 0.0.0.0/0 [1/0] via 192.168.1.1") {
            Line::Route { attrs, .. } => assert_eq!(attrs.protocol, "static"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
