/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use s5p_archive::naming::{
    auxiliary_grammar, nise_grammar, standard_grammar,
    OPEN_VALIDITY_START, OPEN_VALIDITY_STOP
};

const STD_NAME: &str = "S5P_OFFL_L2__NO2____20210305T012345_20210305T030456_17601_03_020400_20210306T121314.nc";
const AUX_NAME: &str = "S5P_OPER_AUX_CTMANA_20200201T000000_20200202T000000_20200131T103000.nc";
const NISE_NAME: &str = "NISE_SSMISF18_20200115.HDFEOS";

#[test]
fn test_standard_grammar_round_trip() {
    let grammar = standard_grammar( "OFFL", "L2__NO2___").unwrap();
    assert!( grammar.matches( STD_NAME));

    let attrs = grammar.parse( STD_NAME).unwrap();
    assert_eq!( attrs.get("file_class"), Some("OFFL"));
    assert_eq!( attrs.get("file_type"), Some("L2__NO2___"));
    assert_eq!( attrs.get("validity_start"), Some("20210305T012345"));
    assert_eq!( attrs.get("validity_stop"), Some("20210305T030456"));
    assert_eq!( attrs.get("orbit"), Some("17601"));
    assert_eq!( attrs.get("collection"), Some("03"));
    assert_eq!( attrs.get("processor_version"), Some("020400"));
    assert_eq!( attrs.get("creation_date"), Some("20210306T121314"));
}

#[test]
fn test_standard_grammar_is_per_type() {
    // the grammar is parameterized with the expected class/type literals - a name of a
    // sibling product type must not match
    let grammar = standard_grammar( "NRTI", "L2__NO2___").unwrap();
    assert!( !grammar.matches( STD_NAME)); // OFFL name against NRTI grammar

    let grammar = standard_grammar( "OFFL", "L2__CO____").unwrap();
    assert!( !grammar.matches( STD_NAME)); // NO2 name against CO grammar
}

#[test]
fn test_standard_grammar_rejects_malformed() {
    let grammar = standard_grammar( "OFFL", "L2__NO2___").unwrap();

    // 4 char orbit field
    assert!( !grammar.matches("S5P_OFFL_L2__NO2____20210305T012345_20210305T030456_1760_03_020400_20210306T121314.nc"));
    // 14 char validity start
    assert!( !grammar.matches("S5P_OFFL_L2__NO2____20210305T01234_20210305T030456_17601_03_020400_20210306T121314.nc"));
    // wrong extension
    assert!( !grammar.matches("S5P_OFFL_L2__NO2____20210305T012345_20210305T030456_17601_03_020400_20210306T121314.cdf"));
    // no extension
    assert!( !grammar.matches("S5P_OFFL_L2__NO2____20210305T012345_20210305T030456_17601_03_020400_20210306T121314"));
    // the match is anchored on both ends
    assert!( !grammar.matches( &format!("x{STD_NAME}")));
    assert!( !grammar.matches( &format!("{STD_NAME}.bak")));
}

#[test]
fn test_auxiliary_grammar_round_trip() {
    let grammar = auxiliary_grammar( "AUX_CTMANA", "nc").unwrap();
    assert!( grammar.matches( AUX_NAME));

    let attrs = grammar.parse( AUX_NAME).unwrap();
    assert_eq!( attrs.get("file_class"), Some("OPER"));
    assert_eq!( attrs.get("file_type"), Some("AUX_CTMANA"));
    assert_eq!( attrs.get("validity_start"), Some("20200201T000000"));
    assert_eq!( attrs.get("validity_stop"), Some("20200202T000000"));
    assert_eq!( attrs.get("creation_date"), Some("20200131T103000"));

    // no orbit/collection/processor_version fields in this grammar
    assert_eq!( attrs.get("orbit"), None);
    assert_eq!( attrs.get("collection"), None);
    assert_eq!( attrs.get("processor_version"), None);
}

#[test]
fn test_auxiliary_grammar_accepts_sentinels() {
    let grammar = auxiliary_grammar( "AUX_CTMANA", "nc").unwrap();
    let name = format!("S5P_OPER_AUX_CTMANA_{}_{}_20200131T103000.nc", OPEN_VALIDITY_START, OPEN_VALIDITY_STOP);
    assert!( grammar.matches( &name));

    let attrs = grammar.parse( &name).unwrap();
    assert_eq!( attrs.get("validity_start"), Some( OPEN_VALIDITY_START));
    assert_eq!( attrs.get("validity_stop"), Some( OPEN_VALIDITY_STOP));
}

#[test]
fn test_auxiliary_grammar_rejects_malformed() {
    let grammar = auxiliary_grammar( "AUX_CTMANA", "nc").unwrap();

    assert!( !grammar.matches("S5P_oper_AUX_CTMANA_20200201T000000_20200202T000000_20200131T103000.nc")); // lowercase class
    assert!( !grammar.matches("S5P_OPER_AUX_CTMFCT_20200201T000000_20200202T000000_20200131T103000.nc")); // wrong type
    assert!( !grammar.matches("S5P_OPER_AUX_CTMANA_20200201T000000_20200202T000000.nc")); // missing creation date
}

#[test]
fn test_auxiliary_grammar_configured_extensions() {
    let cfg_name = "S5P_OPER_CFG_NO2____00000000T000000_99999999T999999_20190101T000000.cfg";
    assert!( auxiliary_grammar( "CFG_NO2___", "cfg").unwrap().matches( cfg_name));
    assert!( !auxiliary_grammar( "CFG_NO2___", "nc").unwrap().matches( cfg_name));

    // empty extension means no '.' separator at all
    let bare = auxiliary_grammar( "AUX_MET_2D", "").unwrap();
    assert!( bare.matches("S5P_OPER_AUX_MET_2D_20200201T000000_99999999T999999_20200131T103000"));
    assert!( !bare.matches("S5P_OPER_AUX_MET_2D_20200201T000000_99999999T999999_20200131T103000.nc"));
}

#[test]
fn test_nise_grammar() {
    let grammar = nise_grammar().unwrap();
    assert!( grammar.matches( NISE_NAME));

    let attrs = grammar.parse( NISE_NAME).unwrap();
    assert_eq!( attrs.get("validity_start"), Some("20200115"));
    assert_eq!( attrs.get("file_class"), None); // fixed literals, no class field

    assert!( !grammar.matches("NISE_SSMISF17_20200115.HDFEOS")); // wrong sensor literal
    assert!( !grammar.matches("NISE_SSMISF18_2020011.HDFEOS"));  // 7 char date
    assert!( !grammar.matches("NISE_SSMISF18_20200115.hdfeos")); // case sensitive extension
}
