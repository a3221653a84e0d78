/// Sentinel the intake form submits when no management company applies.
pub const NO_COMPANY: &str = "none";

const MANAGEMENT_COMPANIES: &[&str] = &[
    "AMC",
    "American Landmark",
    "Asset living",
    "AvalonBay",
    "Avenue5",
    "Beacon",
    "Bell",
    "Berkshire",
    "BH Management",
    "Bozzuto",
    "Bridge",
    "Bridge Investment Group",
    "Brookside",
    "Bryten",
    "Camden",
    "Cirrus",
    "CMC",
    "CONAM",
    "Continental",
    "Cornerstone",
    "Cortland",
    "Cushman & Wakefield",
    "Dominium",
    "Drucker & Falk",
    "Edward Rose & Sons",
    "Elmington",
    "Elon",
    "Envolve",
    "Equity Residential",
    "Essex",
    "Fairfield",
    "First Communities Management",
    "FPI",
    "Franklin Group",
    "Gateway",
    "Georgia MLS Real Estate",
    "Greystar",
    "Hawthorne Residential Partners Llc",
    "Highmark",
    "Irvine",
    "John Stewart",
    "Landmark",
    "MAA",
    "Mark",
    "Mercy Housing",
    "Millennia",
    "Mission Rock",
    "Monarch",
    "Morgan Properties",
    "Moss & Company",
    "Pedcor Companies",
    "Pegasus",
    "Pinnacle",
    "PPM",
    "Premier",
    "Princeton Management",
    "RAM",
    "Rangewater",
    "Redwood",
    "Related Management",
    "Royal American Companies",
    "RPM",
    "S.L. Nusbaum",
    "SPM",
    "Tm Associates",
    "TMO",
    "Trinity",
    "UAG",
    "UDR",
    "UMH Properties",
    "Village Green",
    "Weidner",
    "Westdale",
    "Westminster",
    "Wilhoit",
    "Willow Bridge",
    "Windsor",
    "WINN",
    "Woda",
    "Yes! Communities",
    "ZRS",
];

/// Management companies with a negotiated discount, in display order.
pub fn management_companies() -> &'static [&'static str] {
    MANAGEMENT_COMPANIES
}

pub fn is_known_company(name: &str) -> bool {
    let name = name.trim();
    MANAGEMENT_COMPANIES.iter().any(|company| *company == name)
}
