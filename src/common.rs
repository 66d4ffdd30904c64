//! Primitive vocabularies shared by the US schema groups.

use std::cmp::Ordering;

string_enum! {
    /// Two-letter USPS state code.
    ///
    /// The 50 states plus the District of Columbia, Guam and Puerto Rico.
    /// Any other string is rejected when decoding.
    pub enum StateCode("state code") {
        AK = "AK",
        AL = "AL",
        AR = "AR",
        AZ = "AZ",
        CA = "CA",
        CO = "CO",
        CT = "CT",
        DC = "DC",
        DE = "DE",
        FL = "FL",
        GA = "GA",
        GU = "GU",
        HI = "HI",
        IA = "IA",
        ID = "ID",
        IL = "IL",
        IN = "IN",
        KS = "KS",
        KY = "KY",
        LA = "LA",
        MA = "MA",
        MD = "MD",
        ME = "ME",
        MI = "MI",
        MN = "MN",
        MO = "MO",
        MS = "MS",
        MT = "MT",
        NC = "NC",
        ND = "ND",
        NE = "NE",
        NH = "NH",
        NJ = "NJ",
        NM = "NM",
        NV = "NV",
        NY = "NY",
        OH = "OH",
        OK = "OK",
        OR = "OR",
        PA = "PA",
        PR = "PR",
        RI = "RI",
        SC = "SC",
        SD = "SD",
        TN = "TN",
        TX = "TX",
        UT = "UT",
        VA = "VA",
        VT = "VT",
        WA = "WA",
        WI = "WI",
        WV = "WV",
        WY = "WY",
    }
}

string_enum! {
    /// Precision of a US latitude/longitude pair.
    ///
    /// `Unknown` and `None` mean no usable coordinate was produced. They are
    /// not ranked against the other tiers: comparing either of them with a
    /// real tier yields `None` from `partial_cmp`.
    ///
    /// ```
    /// use addrverify::GeoPrecision;
    ///
    /// assert!(GeoPrecision::Zip9 > GeoPrecision::Zip5);
    /// assert!(GeoPrecision::Unknown.partial_cmp(&GeoPrecision::Zip5).is_none());
    /// ```
    pub enum GeoPrecision("geo precision") {
        /// Coordinates not known, possibly because the address is invalid.
        Unknown = "Unknown",
        /// Coordinates are not provided, e.g. for APO/FPO/DPO addresses.
        None = "None",
        /// Reserved upstream.
        State = "State",
        /// Reserved upstream.
        SolutionArea = "SolutionArea",
        /// Reserved upstream.
        City = "City",
        /// Accurate to a 5-digit ZIP Code (least precise ZIP tier).
        Zip5 = "Zip5",
        /// Accurate to a 6-digit ZIP Code.
        Zip6 = "Zip6",
        /// Accurate to a 7-digit ZIP Code.
        Zip7 = "Zip7",
        /// Accurate to an 8-digit ZIP Code.
        Zip8 = "Zip8",
        /// Accurate to a 9-digit ZIP Code. Not rooftop level.
        Zip9 = "Zip9",
        /// Reserved upstream.
        Structure = "Structure",
    }
}

impl GeoPrecision {
    /// Rank of the tier, or `None` for the tiers that denote absence.
    fn rank(self) -> Option<u8> {
        match self {
            GeoPrecision::Unknown | GeoPrecision::None => None,
            GeoPrecision::State => Some(1),
            GeoPrecision::SolutionArea => Some(2),
            GeoPrecision::City => Some(3),
            GeoPrecision::Zip5 => Some(4),
            GeoPrecision::Zip6 => Some(5),
            GeoPrecision::Zip7 => Some(6),
            GeoPrecision::Zip8 => Some(7),
            GeoPrecision::Zip9 => Some(8),
            GeoPrecision::Structure => Some(9),
        }
    }

    /// Returns true if coordinates tagged with this precision are usable.
    #[must_use]
    pub fn has_coordinates(&self) -> bool {
        self.rank().is_some()
    }
}

impl PartialOrd for GeoPrecision {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => None,
        }
    }
}
