//! Tips and sponsorship information
//!
//! Static data displayed by `nostress-tips`. Purely cosmetic; nothing here
//! touches the key codec.

use serde::Serialize;

/// Project sponsorship details shown by the tips commands
#[derive(Debug, Clone, Serialize)]
pub struct SponsorInfo {
    pub project: &'static str,
    pub developer: &'static str,
    pub lightning_address: &'static str,
    pub nostr_pubkey: &'static str,
    pub github_repo: &'static str,
    pub description: &'static str,
    pub support_methods: &'static [&'static str],
}

impl SponsorInfo {
    pub fn current() -> Self {
        Self {
            project: "nostress - Unix CLI tools for Nostr",
            developer: "hberaud",
            lightning_address: "hberaud@nostrcheck.me",
            nostr_pubkey: "npub1azaaxhlx3v8lex2gnyxzq8ws9nxsh8ga30d64jeaqxw4e75vxufqm434ty",
            github_repo: "https://github.com/nostress/nostress",
            description: "Support Nostr ecosystem development through Lightning zaps",
            support_methods: &[
                "Lightning Network zaps",
                "Follow on Nostr",
                "Direct contributions",
            ],
        }
    }

    /// Full plain-text rendering for `tips show`
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n{}\n\n", self.project, self.description));
        out.push_str(&format!("Lightning Address: {}\n", self.lightning_address));
        out.push_str(&format!("Nostr Public Key:  {}\n", self.nostr_pubkey));
        out.push_str(&format!("GitHub Repository: {}\n", self.github_repo));
        out.push_str("\nSupport methods:\n");
        for method in self.support_methods {
            out.push_str(&format!("  - {}\n", method));
        }
        out
    }
}

/// The Nostress ASCII art logo
pub const LOGO: &str = r#"
                                      +*:
                                      @::@ -:
                                    :@:::@:@:@+
                            +:::::#@:-==+@@::@::
                       :*@@:::::-========---+#@:#
                    =%@:-==================----@:
                 :-=@:========================:@:
               =@:===@=======================--:*=
               =:=======+====+======++=========-=:@#
               :@:+*============+%%-::::@%=====---:%
:@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@:
:@@..@%.#@@@@@@@@@@@@@@..@@. @@@@@@@@@@@@@+=======@==@@@@:
:::@@.:@-.@@@@@@@@@@@%@%=@@..@@..@@@@@@@@@@:*======-#:  :@@@-
  :++*#=**==@@@@@@@@#::-=****==**+%@@@@@@**:+=======:*
    :@%.*@..@@@@@@@@::----=@@..@@.#@@@@@@-:@=======@:@
      -@@@@@@@@@@.:---+**@---@@@@@@@@@@#:-@=========:@:
       :@@%:::::---------------=*@@#*@%+============::@+
      :@:-+-------------------=++++++--=@============-:
       @=++=++++++++++++#@@#+-------+++--@========+-#::
         ::@#++++=-=%@%#++++++++--=+@@@@+=======+++-@:%
            %:::=    :@-+***++*@@%@*+=========++++:#-
                       :@-++++**+==+=====+==+++++-@:
                         +:@#-+++++++++*#*+++++%-:@
                             --@@=++++++++++++++-%:
                               *-*******++++++++-@#
                               :@+*****++++++++-=:
                               #@+++*++++++++++-@-
                               -@++*++====++++---
                               :@++=======++++-@-
                               =-+========+++--#
                              =@==========+++-@:
                              --==========+++-@
                             -@:=========+++++:
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{is_valid_hex_key, KeyPrefix};

    #[test]
    fn test_sponsor_info_text_contains_core_fields() {
        let info = SponsorInfo::current();
        let text = info.to_text();
        assert!(text.contains(info.lightning_address));
        assert!(text.contains(info.nostr_pubkey));
        assert!(text.contains(info.github_repo));
    }

    #[test]
    fn test_sponsor_info_serializes_to_json() {
        let info = SponsorInfo::current();
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["lightning_address"], info.lightning_address);
        assert!(value["support_methods"].is_array());
    }

    #[test]
    fn test_sponsor_pubkey_is_real_nip19_not_our_codec() {
        // The developer's npub is a genuine NIP-19 string; it must NOT decode
        // under the non-standard base58 scheme (bech32 uses '0' and 'l',
        // both outside the base58 alphabet), and it is not hex either.
        let info = SponsorInfo::current();
        assert!(info.nostr_pubkey.starts_with("npub1"));
        assert!(!is_valid_hex_key(info.nostr_pubkey));
        assert!(!crate::keys::is_valid_pseudo_bech32(
            info.nostr_pubkey,
            KeyPrefix::Npub
        ));
    }

    #[test]
    fn test_logo_is_nonempty() {
        assert!(LOGO.lines().count() > 10);
    }
}
