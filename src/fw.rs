/******************************************************************************
 * Vendor memory image for the GSL1680 touch ASIC.                            *
 *                                                                            *
 * The controller has no non-volatile storage; the host replays this image    *
 * into its internal memory on every bring-up. Entries addressed at the       *
 * page-select register (0xF0) switch the active 128-byte window; all other   *
 * entries are 32-bit words at offsets 0x00..=0x7C within that window. The    *
 * words are opaque microcode and calibration data for the touch ASIC and     *
 * carry no semantics worth modelling.                                        *
 * ========================================================================== *
 *                        GSL1680 - Controller memory image                   *
*******************************************************************************/

/// The vendor-provided memory image, replayed verbatim by the firmware
/// loader. Order matters: each page select applies to the offset writes
/// that follow it.
#[rustfmt::skip]
pub(crate) const FIRMWARE: &[(u8, u32)] = &[
  (0xf0, 0x00000000),
  (0x00, 0x0ab511c1),
  (0x04, 0xb921d567),
  (0x08, 0xf223e081),
  (0x0c, 0x00000000),
  (0x10, 0x00000000),
  (0x14, 0x93b76e21),
  (0x18, 0x00000000),
  (0x1c, 0x5195b9d7),
  (0x20, 0x00000000),
  (0x24, 0xff52d52d),
  (0x28, 0x1b13dd16),
  (0x2c, 0x7694848e),
  (0x30, 0x26a3c60c),
  (0x34, 0x922f4e9d),
  (0x38, 0x0466bf03),
  (0x3c, 0x00000000),
  (0x40, 0x7f8f0904),
  (0x44, 0x4b570c33),
  (0x48, 0xf0f6123b),
  (0x4c, 0x649c0703),
  (0x50, 0x6bfeb29d),
  (0x54, 0x0804c52b),
  (0x58, 0xffffffff),
  (0x5c, 0x973baaf4),
  (0x60, 0xaece2306),
  (0x64, 0x3f741c71),
  (0x68, 0x23b6238c),
  (0x6c, 0x1f3ddd8f),
  (0x70, 0x350196e9),
  (0x74, 0xfc4a15e7),
  (0x78, 0x6023f91c),
  (0x7c, 0xff0ea51c),
  (0xf0, 0x00000001),
  (0x00, 0x5e0b298a),
  (0x04, 0x5c74f6f7),
  (0x08, 0x97e483e2),
  (0x0c, 0xf480c5ee),
  (0x10, 0x00000000),
  (0x14, 0x4f8c1426),
  (0x18, 0x6c1ee6e2),
  (0x1c, 0xffffffff),
  (0x20, 0xa5684023),
  (0x24, 0x00e2a435),
  (0x28, 0xd8e1eee7),
  (0x2c, 0x4292f359),
  (0x30, 0x83c27985),
  (0x34, 0x52a5407c),
  (0x38, 0xaffd1809),
  (0x3c, 0x937bf097),
  (0x40, 0x4045a243),
  (0x44, 0x75bab0e5),
  (0x48, 0x576627f6),
  (0x4c, 0xe08d697a),
  (0x50, 0xf9e3facb),
  (0x54, 0x51e1eb56),
  (0x58, 0xfde8bf73),
  (0x5c, 0x00000000),
  (0x60, 0x1dec649e),
  (0x64, 0xbe826801),
  (0x68, 0x00000000),
  (0x6c, 0x5d7d1f7e),
  (0x70, 0x2cc6a6d7),
  (0x74, 0xfb9b61f9),
  (0x78, 0x63254f4b),
  (0x7c, 0x93450f8d),
  (0xf0, 0x00000002),
  (0x00, 0x64226c37),
  (0x04, 0x1d378445),
  (0x08, 0x5a5501da),
  (0x0c, 0xb7a9a14d),
  (0x10, 0xf388512d),
  (0x14, 0xcc1c329b),
  (0x18, 0x03a1803c),
  (0x1c, 0x4765240f),
  (0x20, 0x9f720a5d),
  (0x24, 0x19016d61),
  (0x28, 0xa107b1d7),
  (0x2c, 0xb0923369),
  (0x30, 0x29126ad6),
  (0x34, 0xed5b86b2),
  (0x38, 0x2c3c86f4),
  (0x3c, 0x20a94825),
  (0x40, 0x3c107293),
  (0x44, 0x7a037df2),
  (0x48, 0xa21bd2ac),
  (0x4c, 0xd189efeb),
  (0x50, 0x62ebc3f1),
  (0x54, 0x482839db),
  (0x58, 0xad7cb412),
  (0x5c, 0x4423d44d),
  (0x60, 0x00000000),
  (0x64, 0x5665a02a),
  (0x68, 0xae72b25a),
  (0x6c, 0xff084686),
  (0x70, 0x0cc7502a),
  (0x74, 0x3e8e0a2b),
  (0x78, 0x06a9ac0e),
  (0x7c, 0x5626c6da),
  (0xf0, 0x00000003),
  (0x00, 0x5145f524),
  (0x04, 0x13c15854),
  (0x08, 0x21b34211),
  (0x0c, 0x77d99bc9),
  (0x10, 0xd0b3aab9),
  (0x14, 0x197fd12b),
  (0x18, 0x8802d046),
  (0x1c, 0x93455123),
  (0x20, 0x15449ff3),
  (0x24, 0x51ed296e),
  (0x28, 0x6cd2f2ce),
  (0x2c, 0x63ee5aeb),
  (0x30, 0xbedeb8f2),
  (0x34, 0x51d94e52),
  (0x38, 0x7a75793b),
  (0x3c, 0x7f1c01d2),
  (0x40, 0x1be1f661),
  (0x44, 0x80955a17),
  (0x48, 0x5122507c),
  (0x4c, 0x7e9660aa),
  (0x50, 0xe2ec448b),
  (0x54, 0x25df2715),
  (0x58, 0xe68116eb),
  (0x5c, 0x4fde8c65),
  (0x60, 0x541e0acc),
  (0x64, 0x3dbfcd8f),
  (0x68, 0x00000000),
  (0x6c, 0xf0ca17e3),
  (0x70, 0x00000000),
  (0x74, 0xd35a275e),
  (0x78, 0x61843c46),
  (0x7c, 0x00000000),
  (0xf0, 0x00000004),
  (0x00, 0xe5d17dba),
  (0x04, 0x86ad49a9),
  (0x08, 0xdc97b2c5),
  (0x0c, 0x732ff3e2),
  (0x10, 0x272d5c2b),
  (0x14, 0x19a7359f),
  (0x18, 0x1d81e8b5),
  (0x1c, 0x327c473e),
  (0x20, 0xe9e09413),
  (0x24, 0xffffffff),
  (0x28, 0xf17e3905),
  (0x2c, 0xfd8ec76a),
  (0x30, 0x89112ebb),
  (0x34, 0x00000000),
  (0x38, 0x1bb77507),
  (0x3c, 0x57ea1e0c),
  (0x40, 0x91591739),
  (0x44, 0xc473b226),
  (0x48, 0xf4d24c9d),
  (0x4c, 0xffffffff),
  (0x50, 0x93402f9f),
  (0x54, 0x40c31c06),
  (0x58, 0x4b3a7947),
  (0x5c, 0x8641f28e),
  (0x60, 0xba1dbe46),
  (0x64, 0xb77a6d2c),
  (0x68, 0xa12d9823),
  (0x6c, 0x5717d7d7),
  (0x70, 0x10414501),
  (0x74, 0x24ce5751),
  (0x78, 0x2aa40823),
  (0x7c, 0xdfa78393),
  (0xf0, 0x00000005),
  (0x00, 0xd56b7b59),
  (0x04, 0xfa00cd79),
  (0x08, 0x965c096e),
  (0x0c, 0xf9499816),
  (0x10, 0x832c9b53),
  (0x14, 0x00000000),
  (0x18, 0x6de5858b),
  (0x1c, 0x77c5ef01),
  (0x20, 0x8e90e873),
  (0x24, 0xe046f63c),
  (0x28, 0xeeac46fc),
  (0x2c, 0xa80d4d65),
  (0x30, 0x359c5b15),
  (0x34, 0x612a292a),
  (0x38, 0xa5e01e8d),
  (0x3c, 0x600c5f35),
  (0x40, 0x00000000),
  (0x44, 0x70973291),
  (0x48, 0x4e6e6793),
  (0x4c, 0xffffffff),
  (0x50, 0x00000000),
  (0x54, 0xdd4ff28e),
  (0x58, 0x40da4321),
  (0x5c, 0x1f7288be),
  (0x60, 0x82c89e0c),
  (0x64, 0x00000000),
  (0x68, 0xda8e1bc1),
  (0x6c, 0x2730d07a),
  (0x70, 0x9ace5245),
  (0x74, 0x405d9ac6),
  (0x78, 0x93a14bc4),
  (0x7c, 0x00000000),
  (0xf0, 0x00000006),
  (0x00, 0xba5eeb87),
  (0x04, 0x00000000),
  (0x08, 0x10c67065),
  (0x0c, 0x00000000),
  (0x10, 0x23dc2efe),
  (0x14, 0x6674021f),
  (0x18, 0x20c5b184),
  (0x1c, 0x485a253e),
  (0x20, 0x00000000),
  (0x24, 0xe71290d4),
  (0x28, 0x00000000),
  (0x2c, 0xb56850f5),
  (0x30, 0x51a3468e),
  (0x34, 0x1721dcd7),
  (0x38, 0xbbde7bca),
  (0x3c, 0xe04732b9),
  (0x40, 0xc4122791),
  (0x44, 0x9ce8bbc1),
  (0x48, 0xf98b1f29),
  (0x4c, 0xd7a031de),
  (0x50, 0xe2e8bb73),
  (0x54, 0x00000000),
  (0x58, 0xe3371022),
  (0x5c, 0x275947db),
  (0x60, 0xfbe6214a),
  (0x64, 0xc620ab0d),
  (0x68, 0xbb6d370d),
  (0x6c, 0xac1fa0ab),
  (0x70, 0x5957796e),
  (0x74, 0x7926a833),
  (0x78, 0x28335a43),
  (0x7c, 0x2c18643e),
  (0xf0, 0x00000007),
  (0x00, 0x33693a51),
  (0x04, 0x00000000),
  (0x08, 0xda617d64),
  (0x0c, 0x4c7d77c2),
  (0x10, 0x00000000),
  (0x14, 0x1f4f493e),
  (0x18, 0x3b76b34a),
  (0x1c, 0xffffffff),
  (0x20, 0x813af144),
  (0x24, 0xffffffff),
  (0x28, 0xb230d3d3),
  (0x2c, 0xa1161936),
  (0x30, 0x242dedee),
  (0x34, 0xab9c45e6),
  (0x38, 0x47321ab6),
  (0x3c, 0x88ffc804),
  (0x40, 0x4e116f9b),
  (0x44, 0x1fa5f32a),
  (0x48, 0x99dc9a8a),
  (0x4c, 0x5b36264c),
  (0x50, 0x6002dfd3),
  (0x54, 0x44ece7cf),
  (0x58, 0xdab81365),
  (0x5c, 0xc24f3eef),
  (0x60, 0x97cb48e6),
  (0x64, 0x2429062d),
  (0x68, 0x99782f3b),
  (0x6c, 0x0f7f2ff4),
  (0x70, 0xbaba8c34),
  (0x74, 0x8cb34cea),
  (0x78, 0x40e1b1dd),
  (0x7c, 0x00000000),
  (0xf0, 0x00000008),
  (0x00, 0x0322eb34),
  (0x04, 0x96ccc6d6),
  (0x08, 0xccd63a7d),
  (0x0c, 0x78aa6991),
  (0x10, 0x869238fd),
  (0x14, 0xf032ff5b),
  (0x18, 0x54e0de57),
  (0x1c, 0xaa692182),
  (0x20, 0x457df36e),
  (0x24, 0x99199226),
  (0x28, 0x00000000),
  (0x2c, 0xbbb5fa5e),
  (0x30, 0x9b393c01),
  (0x34, 0xffffffff),
  (0x38, 0x5f7b39ea),
  (0x3c, 0xffffffff),
  (0x40, 0x09eee522),
  (0x44, 0x7c133f67),
  (0x48, 0x00000000),
  (0x4c, 0x52eb9be3),
  (0x50, 0x00000000),
  (0x54, 0x175a409f),
  (0x58, 0xb678685b),
  (0x5c, 0xd519e9a2),
  (0x60, 0xed966b34),
  (0x64, 0x3eef92cc),
  (0x68, 0x5a78e677),
  (0x6c, 0x907280ac),
  (0x70, 0xcc8b737f),
  (0x74, 0xfe7c83ad),
  (0x78, 0xffffffff),
  (0x7c, 0x3c430e84),
  (0xf0, 0x00000009),
  (0x00, 0xefe7a9ed),
  (0x04, 0x00000000),
  (0x08, 0x72593da5),
  (0x0c, 0xe85b5d33),
  (0x10, 0xfc52e56d),
  (0x14, 0xbf1db752),
  (0x18, 0x37098689),
  (0x1c, 0xfccc09c5),
  (0x20, 0xc36670df),
  (0x24, 0xa2cf5a41),
  (0x28, 0x796c8ec2),
  (0x2c, 0x00000000),
  (0x30, 0x00000000),
  (0x34, 0xdcb78653),
  (0x38, 0xa3c3fdcd),
  (0x3c, 0x00000000),
  (0x40, 0xffffffff),
  (0x44, 0xce9223fb),
  (0x48, 0xd74dd72d),
  (0x4c, 0xd8a07ed9),
  (0x50, 0x381d99e4),
  (0x54, 0xef0ad2f4),
  (0x58, 0x1fd5039e),
  (0x5c, 0x4b7515ed),
  (0x60, 0xd0d0e029),
  (0x64, 0x56616e23),
  (0x68, 0x0f034dd1),
  (0x6c, 0xb1928f2d),
  (0x70, 0xee9cbdd6),
  (0x74, 0x5dee69e5),
  (0x78, 0x8a82b00c),
  (0x7c, 0x4ce897ed),
  (0xf0, 0x0000000a),
  (0x00, 0x9cb60407),
  (0x04, 0xdaef899c),
  (0x08, 0x505f9232),
  (0x0c, 0xe129e4fe),
  (0x10, 0x6b7f0e85),
  (0x14, 0xdf529192),
  (0x18, 0x21727362),
  (0x1c, 0x8cde994d),
  (0x20, 0xa115c076),
  (0x24, 0x3a7a939b),
  (0x28, 0x6931347f),
  (0x2c, 0x00000000),
  (0x30, 0xba0eaeaa),
  (0x34, 0x94a0f1a7),
  (0x38, 0xd81ec94d),
  (0x3c, 0x27da5316),
  (0x40, 0xdaac1c8a),
  (0x44, 0x7e937294),
  (0x48, 0x08fea474),
  (0x4c, 0x527903cc),
  (0x50, 0x3217e34c),
  (0x54, 0x01be8a13),
  (0x58, 0xcf6ccfcd),
  (0x5c, 0x843dd467),
  (0x60, 0xe8944cdf),
  (0x64, 0x00000000),
  (0x68, 0x80f9bc33),
  (0x6c, 0x588f760c),
  (0x70, 0x7f9b084b),
  (0x74, 0xccde8742),
  (0x78, 0x9aefe279),
  (0x7c, 0xb2bed409),
  (0xf0, 0x0000000b),
  (0x00, 0x6fc7c2d6),
  (0x04, 0x00000000),
  (0x08, 0xc794cac3),
  (0x0c, 0x875c3105),
  (0x10, 0x2eeea6db),
  (0x14, 0xbc82c3e1),
  (0x18, 0x7b2ca25e),
  (0x1c, 0x0385a84d),
  (0x20, 0x6706326b),
  (0x24, 0x882b5b0e),
  (0x28, 0x8a17bfcb),
  (0x2c, 0xc032c6bc),
  (0x30, 0x8444530e),
  (0x34, 0xca97179c),
  (0x38, 0x24f4f66e),
  (0x3c, 0xfd140532),
  (0x40, 0xcbfd068b),
  (0x44, 0x0ea630bd),
  (0x48, 0xde8f6845),
  (0x4c, 0x437de146),
  (0x50, 0x15fe836c),
  (0x54, 0x77ff5505),
  (0x58, 0x36a8ceea),
  (0x5c, 0x00000000),
  (0x60, 0xe23ba846),
  (0x64, 0x7157583f),
  (0x68, 0xd04e57f7),
  (0x6c, 0x4ca7ef4f),
  (0x70, 0x00000000),
  (0x74, 0xb6ec2c84),
  (0x78, 0x5cea127a),
  (0x7c, 0x00000000),
  (0xf0, 0x0000000c),
  (0x00, 0xb475a70d),
  (0x04, 0x1214efa7),
  (0x08, 0x73e942b7),
  (0x0c, 0x00000000),
  (0x10, 0xe0615f49),
  (0x14, 0xba8b4b2d),
  (0x18, 0xae3ed99a),
  (0x1c, 0xd4b9c09c),
  (0x20, 0x79ecefe9),
  (0x24, 0x662601c1),
  (0x28, 0x65d02b0e),
  (0x2c, 0x768ab196),
  (0x30, 0x37b4588a),
  (0x34, 0x00000000),
  (0x38, 0xed6cd063),
  (0x3c, 0x9b71f1b3),
  (0x40, 0x00000000),
  (0x44, 0xca26661e),
  (0x48, 0xda5108ec),
  (0x4c, 0x92d25c0a),
  (0x50, 0xf33d64c3),
  (0x54, 0xab004931),
  (0x58, 0xe6e13c62),
  (0x5c, 0xecce8654),
  (0x60, 0xbc871296),
  (0x64, 0x846a427c),
  (0x68, 0x489129ae),
  (0x6c, 0xd93f30fc),
  (0x70, 0xdb3542ec),
  (0x74, 0x00000000),
  (0x78, 0x63e02aa6),
  (0x7c, 0xb02fe67c),
  (0xf0, 0x0000000d),
  (0x00, 0xd0e8418c),
  (0x04, 0x00000000),
  (0x08, 0x00000000),
  (0x0c, 0x833ed083),
  (0x10, 0x7cfd1e94),
  (0x14, 0x3ad1d163),
  (0x18, 0x1f4b92bd),
  (0x1c, 0xce9c8253),
  (0x20, 0x00000000),
  (0x24, 0x40438d1c),
  (0x28, 0x0de2a86c),
  (0x2c, 0x450f877b),
  (0x30, 0x09f70ceb),
  (0x34, 0xe529031e),
  (0x38, 0x6c1e96db),
  (0x3c, 0x66709e99),
  (0x40, 0x00000000),
  (0x44, 0xaf31f3d5),
  (0x48, 0x00000000),
  (0x4c, 0x6643e853),
  (0x50, 0x72793b17),
  (0x54, 0xf665c2da),
  (0x58, 0x89ea1d65),
  (0x5c, 0x829dd086),
  (0x60, 0x00000000),
  (0x64, 0xcd2dea5a),
  (0x68, 0x7cb4df49),
  (0x6c, 0x0cec1007),
  (0x70, 0x537a5951),
  (0x74, 0x125eda59),
  (0x78, 0xeba644b3),
  (0x7c, 0x4536904b),
  (0xf0, 0x0000000e),
  (0x00, 0x70c8c154),
  (0x04, 0x74acd185),
  (0x08, 0x3d1cdfab),
  (0x0c, 0x7bd4773f),
  (0x10, 0x534e5966),
  (0x14, 0x94387fb7),
  (0x18, 0x00000000),
  (0x1c, 0x52cabb3f),
  (0x20, 0xb00664c9),
  (0x24, 0xef702a46),
  (0x28, 0xad2b741a),
  (0x2c, 0xb6a2ec0e),
  (0x30, 0xffffffff),
  (0x34, 0xc2fea4fc),
  (0x38, 0xda44d64c),
  (0x3c, 0x5123b74a),
  (0x40, 0xde96714f),
  (0x44, 0x00000000),
  (0x48, 0x95f093e7),
  (0x4c, 0x760a3401),
  (0x50, 0x21cb84c4),
  (0x54, 0x7b36a1cd),
  (0x58, 0x4ee59f0a),
  (0x5c, 0x00000000),
  (0x60, 0x00000000),
  (0x64, 0xdbb0fa97),
  (0x68, 0x58ad6426),
  (0x6c, 0x71121872),
  (0x70, 0x71946efc),
  (0x74, 0x75398bf9),
  (0x78, 0xcc97b29a),
  (0x7c, 0x00000000),
  (0xf0, 0x0000000f),
  (0x00, 0x48802bbb),
  (0x04, 0x00000000),
  (0x08, 0xdde083b9),
  (0x0c, 0xffffffff),
  (0x10, 0xd32524f6),
  (0x14, 0x80c03a4b),
  (0x18, 0xffffffff),
  (0x1c, 0x475de63c),
  (0x20, 0xffffffff),
  (0x24, 0x00000000),
  (0x28, 0xbac1ca9e),
  (0x2c, 0xf1db21b7),
  (0x30, 0x285ce361),
  (0x34, 0x3223b659),
  (0x38, 0xd9fe318d),
  (0x3c, 0xe63c532a),
  (0x40, 0xe77d85c6),
  (0x44, 0xaf68aaa4),
  (0x48, 0xfdb280fa),
  (0x4c, 0x181f53ac),
  (0x50, 0xbf3ff9b9),
  (0x54, 0x4117ce1d),
  (0x58, 0xa2527c97),
  (0x5c, 0x55dda497),
  (0x60, 0x00000000),
  (0x64, 0x231665a7),
  (0x68, 0x1bfcbcb6),
  (0x6c, 0x012d6ae3),
  (0x70, 0xffffffff),
  (0x74, 0x2f1ec74d),
  (0x78, 0x09148a76),
  (0x7c, 0x931acd3b),
  (0xf0, 0x00000010),
  (0x00, 0x9d04c4c5),
  (0x04, 0xb610a76b),
  (0x08, 0xfd4f54b5),
  (0x0c, 0xece61479),
  (0x10, 0xe34d4aed),
  (0x14, 0x08093345),
  (0x18, 0xe2510ad5),
  (0x1c, 0x00000000),
  (0x20, 0x3d4395fc),
  (0x24, 0xb07a7242),
  (0x28, 0xffffffff),
  (0x2c, 0xd32828c5),
  (0x30, 0x102c987d),
  (0x34, 0xe74c446c),
  (0x38, 0x97ff820c),
  (0x3c, 0x90780bb3),
  (0x40, 0xb0ca45b4),
  (0x44, 0xf7eb88ca),
  (0x48, 0x58a3fdd3),
  (0x4c, 0xc42845bf),
  (0x50, 0x00000000),
  (0x54, 0xb3e4da1c),
  (0x58, 0x3c4e87af),
  (0x5c, 0x7bd92fb2),
  (0x60, 0x9bc75405),
  (0x64, 0x59be5866),
  (0x68, 0xc4e8f6df),
  (0x6c, 0x9c5c0306),
  (0x70, 0x00000000),
  (0x74, 0xfaa8d04b),
  (0x78, 0xf499c37b),
  (0x7c, 0x00000000),
  (0xf0, 0x00000011),
  (0x00, 0x4f4b62a7),
  (0x04, 0x00000000),
  (0x08, 0x3b39aebc),
  (0x0c, 0xd32b10ab),
  (0x10, 0x96fb2eb4),
  (0x14, 0x96973362),
  (0x18, 0x6f9228ff),
  (0x1c, 0x7b366a99),
  (0x20, 0x7ac724cb),
  (0x24, 0x559f7764),
  (0x28, 0xd506f17d),
  (0x2c, 0x6e03c9c9),
  (0x30, 0xf066a8d4),
  (0x34, 0x8afb772a),
  (0x38, 0x67d6e185),
  (0x3c, 0xc72592b6),
  (0x40, 0xdb1e69ef),
  (0x44, 0xd253dd3e),
  (0x48, 0x977d7144),
  (0x4c, 0x13e8502e),
  (0x50, 0x00000000),
  (0x54, 0x700bc4ca),
  (0x58, 0x1ac290e3),
  (0x5c, 0x5304450c),
  (0x60, 0xaf10b31e),
  (0x64, 0x9716db47),
  (0x68, 0x00000000),
  (0x6c, 0xcba398a1),
  (0x70, 0xae4b7bba),
  (0x74, 0xffffffff),
  (0x78, 0x29345fa5),
  (0x7c, 0xfad57665),
  (0xf0, 0x00000012),
  (0x00, 0xd7267149),
  (0x04, 0x38e4e40e),
  (0x08, 0x28cbb1bc),
  (0x0c, 0x817fc682),
  (0x10, 0x4c58f0f5),
  (0x14, 0x1a894316),
  (0x18, 0x6f98d603),
  (0x1c, 0xde49194f),
  (0x20, 0x5170781f),
  (0x24, 0x900553e6),
  (0x28, 0x7548559a),
  (0x2c, 0x809e6687),
  (0x30, 0x00000000),
  (0x34, 0xf2d159c7),
  (0x38, 0xe4d37353),
  (0x3c, 0xdd9397ef),
  (0x40, 0x00000000),
  (0x44, 0x00000000),
  (0x48, 0x7a737591),
  (0x4c, 0x8ceaa1d1),
  (0x50, 0xc2cd5a99),
  (0x54, 0x5a578496),
  (0x58, 0xf2672f74),
  (0x5c, 0x00000000),
  (0x60, 0x5d894a65),
  (0x64, 0xec7fd0e7),
  (0x68, 0xda044116),
  (0x6c, 0x16f3a8a5),
  (0x70, 0x1f001396),
  (0x74, 0xb32978cf),
  (0x78, 0x1a2a0c37),
  (0x7c, 0x2e34fdc1),
  (0xf0, 0x00000013),
  (0x00, 0x801c25e7),
  (0x04, 0x90b83157),
  (0x08, 0x44c1d9de),
  (0x0c, 0x80bee243),
  (0x10, 0x00000000),
  (0x14, 0x4fcb6bda),
  (0x18, 0x74b76ac2),
  (0x1c, 0xa403a095),
  (0x20, 0xd23c7b3d),
  (0x24, 0x00000000),
  (0x28, 0x843a779b),
  (0x2c, 0x93e72d1f),
  (0x30, 0xbeda319d),
  (0x34, 0xe5d450c9),
  (0x38, 0x9665a2cf),
  (0x3c, 0x65b629f1),
  (0x40, 0xb1836f15),
  (0x44, 0x50558585),
  (0x48, 0xfc4feb17),
  (0x4c, 0x248c7ba1),
  (0x50, 0xd4f9c5fd),
  (0x54, 0x6484681e),
  (0x58, 0xd97c477d),
  (0x5c, 0x63ea3934),
  (0x60, 0xbd59c112),
  (0x64, 0x2a03b64f),
  (0x68, 0xc5857d6a),
  (0x6c, 0x2f2907be),
  (0x70, 0xf406ca71),
  (0x74, 0x84576675),
  (0x78, 0x7ba7b519),
  (0x7c, 0x2d9ea0fb),
  (0xf0, 0x00000014),
  (0x00, 0xc9b63b5b),
  (0x04, 0xd576da95),
  (0x08, 0xcaabcd67),
  (0x0c, 0xd3e9e864),
  (0x10, 0x3246fdd6),
  (0x14, 0x00000000),
  (0x18, 0x00000000),
  (0x1c, 0xc45c77d2),
  (0x20, 0x1e6442a1),
  (0x24, 0x50351e99),
  (0x28, 0x8f2eaa2a),
  (0x2c, 0x171324ff),
  (0x30, 0x02135a19),
  (0x34, 0x43599891),
  (0x38, 0x793b9634),
  (0x3c, 0x745f6a8a),
  (0x40, 0xb8c2a7ad),
  (0x44, 0x6ad94776),
  (0x48, 0x04c36bcd),
  (0x4c, 0x00000000),
  (0x50, 0x55ab15d3),
  (0x54, 0xd53ca53b),
  (0x58, 0x72e75b36),
  (0x5c, 0xa9bb2936),
  (0x60, 0x00000000),
  (0x64, 0xb74234c9),
  (0x68, 0xcab6e8a4),
  (0x6c, 0xe3ee0dd5),
  (0x70, 0x68c3231f),
  (0x74, 0x98b86caf),
  (0x78, 0x30950119),
  (0x7c, 0x867b4102),
  (0xf0, 0x00000015),
  (0x00, 0x2535b3cf),
  (0x04, 0xfacf5749),
  (0x08, 0x14e9941a),
  (0x0c, 0xeb3222cf),
  (0x10, 0x42193a3a),
  (0x14, 0xce975a35),
  (0x18, 0x9fecf37d),
  (0x1c, 0x31e9243c),
  (0x20, 0xb8bb7feb),
  (0x24, 0x00000000),
  (0x28, 0x00000000),
  (0x2c, 0x36351653),
  (0x30, 0x0b18b9ac),
  (0x34, 0x998bc0fa),
  (0x38, 0x00000000),
  (0x3c, 0x345aaa16),
  (0x40, 0x421309da),
  (0x44, 0x4623518e),
  (0x48, 0xae427767),
  (0x4c, 0x00000000),
  (0x50, 0x1fdf28da),
  (0x54, 0x00000000),
  (0x58, 0x00000000),
  (0x5c, 0xdb4f341a),
  (0x60, 0x8441357c),
  (0x64, 0xff32656b),
  (0x68, 0xc074c824),
  (0x6c, 0x777cf71c),
  (0x70, 0xda7f79b3),
  (0x74, 0x9c6961f7),
  (0x78, 0xbaace25c),
  (0x7c, 0xfa0954cf),
  (0xf0, 0x00000016),
  (0x00, 0xc28b4c67),
  (0x04, 0xcbf8c564),
  (0x08, 0xb9d1b50e),
  (0x0c, 0xffffffff),
  (0x10, 0x12e6a3ca),
  (0x14, 0xffffffff),
  (0x18, 0x00000000),
  (0x1c, 0x00000000),
  (0x20, 0x00000000),
  (0x24, 0xb12ce47f),
  (0x28, 0x99c1476e),
  (0x2c, 0x00000000),
  (0x30, 0x65ab0d2c),
  (0x34, 0x85df6a4b),
  (0x38, 0x00000000),
  (0x3c, 0x00000000),
  (0x40, 0x5d705261),
  (0x44, 0xb0b7661f),
  (0x48, 0xd2e1ac85),
  (0x4c, 0x095e989d),
  (0x50, 0x93e7e2db),
  (0x54, 0x982a15a5),
  (0x58, 0x8945c5aa),
  (0x5c, 0x0fe33712),
  (0x60, 0x492931d2),
  (0x64, 0x8d7b8d3b),
  (0x68, 0x674ef9f5),
  (0x6c, 0xb670bc6d),
  (0x70, 0x9e54def3),
  (0x74, 0xb4dd3af6),
  (0x78, 0x63fd95d7),
  (0x7c, 0xf9a4b3f4),
  (0xf0, 0x00000017),
  (0x00, 0x949a8739),
  (0x04, 0x4bc565e7),
  (0x08, 0x08473d3b),
  (0x0c, 0x13e573ab),
  (0x10, 0x0f99e103),
  (0x14, 0x448a833f),
  (0x18, 0x89404069),
  (0x1c, 0xa8e9392f),
  (0x20, 0x765f47e9),
  (0x24, 0x00000000),
  (0x28, 0x00000000),
  (0x2c, 0xffffffff),
  (0x30, 0x0f850f9f),
  (0x34, 0x60a1ac24),
  (0x38, 0xf185d076),
  (0x3c, 0x3aed83d3),
  (0x40, 0x00000000),
  (0x44, 0x00000000),
  (0x48, 0x8bb8ab35),
  (0x4c, 0x4516cf1a),
  (0x50, 0x00000000),
  (0x54, 0x00000000),
  (0x58, 0x47725132),
  (0x5c, 0x00000000),
  (0x60, 0x13fefe7a),
  (0x64, 0x4a0ad422),
  (0x68, 0x015d10c5),
  (0x6c, 0xcbf9cd87),
  (0x70, 0xbb63c0c3),
  (0x74, 0xac03eebe),
  (0x78, 0xeb5c8cd4),
  (0x7c, 0x22000757),
  (0xf0, 0x00000018),
  (0x00, 0x7fb43262),
  (0x04, 0xc6f9dd5e),
  (0x08, 0x571e1d17),
  (0x0c, 0x032a5e69),
  (0x10, 0x540c195a),
  (0x14, 0x33c16be9),
  (0x18, 0xc934d257),
  (0x1c, 0x00000000),
  (0x20, 0x00000000),
  (0x24, 0x79027257),
  (0x28, 0xde59b793),
  (0x2c, 0xfddfdb06),
  (0x30, 0xd15c1379),
  (0x34, 0x00000000),
  (0x38, 0x8c075ce6),
  (0x3c, 0x94ee4a4b),
  (0x40, 0x00000000),
  (0x44, 0x6d27d202),
  (0x48, 0x7b9cef91),
  (0x4c, 0x2bb92866),
  (0x50, 0xd80808bc),
  (0x54, 0xfae36253),
  (0x58, 0x438069e7),
  (0x5c, 0x99297999),
  (0x60, 0x755a5014),
  (0x64, 0x00000000),
  (0x68, 0x999e6373),
  (0x6c, 0xebf518eb),
  (0x70, 0x55e3cf7f),
  (0x74, 0xad8b1659),
  (0x78, 0x274a6ed9),
  (0x7c, 0x38be09b1),
  (0xf0, 0x00000019),
  (0x00, 0xc882fbd5),
  (0x04, 0x68fa1509),
  (0x08, 0x613f24a4),
  (0x0c, 0x30d72851),
  (0x10, 0x6e71355f),
  (0x14, 0x5384d772),
  (0x18, 0xe4348b27),
  (0x1c, 0xdf5a606f),
  (0x20, 0xf9aef144),
  (0x24, 0xd74a3267),
  (0x28, 0xb1d5c664),
  (0x2c, 0x00000000),
  (0x30, 0x304f7ace),
  (0x34, 0x3dcc7de5),
  (0x38, 0xfc601f7d),
  (0x3c, 0x0e77d7fa),
  (0x40, 0x65955a7e),
  (0x44, 0x15855f73),
  (0x48, 0x73076886),
  (0x4c, 0x5ceb162d),
  (0x50, 0xfbfb8e7a),
  (0x54, 0x00000000),
  (0x58, 0x797237c4),
  (0x5c, 0xcedfa821),
  (0x60, 0x40a92c4c),
  (0x64, 0xc133455c),
  (0x68, 0x00000000),
  (0x6c, 0x11e0596c),
  (0x70, 0x4377554a),
  (0x74, 0x92167505),
  (0x78, 0xca69909e),
  (0x7c, 0xf73fb8c3),
  (0xf0, 0x0000001a),
  (0x00, 0x00000000),
  (0x04, 0x0c571ef3),
  (0x08, 0x1ea82fd7),
  (0x0c, 0x710a8dbe),
  (0x10, 0x00000000),
  (0x14, 0x8e781ad5),
  (0x18, 0x297d74c4),
  (0x1c, 0x7b5351f6),
  (0x20, 0x00000000),
  (0x24, 0xb42e435b),
  (0x28, 0xf4e6b259),
  (0x2c, 0x771de2ef),
  (0x30, 0xa34c8eaf),
  (0x34, 0xffffffff),
  (0x38, 0x00000000),
  (0x3c, 0x8a3b66e7),
  (0x40, 0x3a194714),
  (0x44, 0x4d820349),
  (0x48, 0xb08f923c),
  (0x4c, 0x00000000),
  (0x50, 0xc863377a),
  (0x54, 0x7f0827bc),
  (0x58, 0x040cd223),
  (0x5c, 0x57575de7),
  (0x60, 0x219791d2),
  (0x64, 0xa61ab884),
  (0x68, 0xd0424021),
  (0x6c, 0x9083ac42),
  (0x70, 0x44784627),
  (0x74, 0xdb2c8f59),
  (0x78, 0x1236cd7a),
  (0x7c, 0xb8a4fe76),
  (0xf0, 0x0000001b),
  (0x00, 0xca2f95a3),
  (0x04, 0x2be6d42e),
  (0x08, 0xdd0eff7f),
  (0x0c, 0x5ec2dfef),
  (0x10, 0x00000000),
  (0x14, 0xa66fae4b),
  (0x18, 0x00000000),
  (0x1c, 0xd8cdebec),
  (0x20, 0xd3bb7fb4),
  (0x24, 0x35f993d2),
  (0x28, 0xf7f9d273),
  (0x2c, 0x00000000),
  (0x30, 0xbc7d2a94),
  (0x34, 0x3cdb6663),
  (0x38, 0x00000000),
  (0x3c, 0xdd6360c7),
  (0x40, 0x9e00d73a),
  (0x44, 0x181d7c69),
  (0x48, 0x4590f381),
  (0x4c, 0x27ff3051),
  (0x50, 0xff5b65cb),
  (0x54, 0xefabcb7a),
  (0x58, 0x00000000),
  (0x5c, 0x11caa8e7),
  (0x60, 0xde1b3b0c),
  (0x64, 0x96261191),
  (0x68, 0xd69768fb),
  (0x6c, 0x4a8ab2df),
  (0x70, 0xffffffff),
  (0x74, 0x29b8f46f),
  (0x78, 0xd194f155),
  (0x7c, 0xb870a7ca),
  (0xf0, 0x0000001c),
  (0x00, 0x3dbf804e),
  (0x04, 0x7b72f435),
  (0x08, 0x9b7c9f2f),
  (0x0c, 0x1bb61703),
  (0x10, 0x00000000),
  (0x14, 0x00000000),
  (0x18, 0x937ea824),
  (0x1c, 0x893b6839),
  (0x20, 0x63bb7ec7),
  (0x24, 0x80108636),
  (0x28, 0x8a17c5fd),
  (0x2c, 0x27a3c989),
  (0x30, 0x00000000),
  (0x34, 0x2d5d5069),
  (0x38, 0x6d564be1),
  (0x3c, 0xffffffff),
  (0x40, 0xb1fb3115),
  (0x44, 0x2ce6a5d9),
  (0x48, 0xf3e2c717),
  (0x4c, 0xcb0e2077),
  (0x50, 0xef183917),
  (0x54, 0xef6f0c4a),
  (0x58, 0xd22f2c19),
  (0x5c, 0xc22eee2f),
  (0x60, 0xe28b3a9a),
  (0x64, 0x3edf36b6),
  (0x68, 0xd93accf2),
  (0x6c, 0x00000000),
  (0x70, 0xda01a1b4),
  (0x74, 0x28dd834f),
  (0x78, 0x8e31cdb5),
  (0x7c, 0x4761f8b6),
  (0xf0, 0x0000001d),
  (0x00, 0x7697952d),
  (0x04, 0x027c91b4),
  (0x08, 0x99016bb1),
  (0x0c, 0x3a9520ca),
  (0x10, 0x4f09de0c),
  (0x14, 0x00000000),
  (0x18, 0x6dd3f29c),
  (0x1c, 0x638f10dc),
  (0x20, 0xb30ed2d6),
  (0x24, 0x43d0e9fc),
  (0x28, 0x830797eb),
  (0x2c, 0x4ea32dd6),
  (0x30, 0x4826f31a),
  (0x34, 0x00000000),
  (0x38, 0x22a20976),
  (0x3c, 0x00000000),
  (0x40, 0x977ef312),
  (0x44, 0x6a8e641c),
  (0x48, 0x67bb545a),
  (0x4c, 0xab324a82),
  (0x50, 0xae2d0dd3),
  (0x54, 0x00000000),
  (0x58, 0xb377d3b4),
  (0x5c, 0x692f91b4),
  (0x60, 0x00000000),
  (0x64, 0xc9e4d8d2),
  (0x68, 0x0d28840d),
  (0x6c, 0xa88c71f9),
  (0x70, 0x00000000),
  (0x74, 0xd3e4ab47),
  (0x78, 0x97016821),
  (0x7c, 0xfaa7b143),
  (0xf0, 0x0000001e),
  (0x00, 0xffffffff),
  (0x04, 0x4b30e286),
  (0x08, 0xbb612ff6),
  (0x0c, 0x4d6bb799),
  (0x10, 0x4889c0f5),
  (0x14, 0x627c4f7e),
  (0x18, 0x99ecac57),
  (0x1c, 0x80af06e4),
  (0x20, 0x6e056d7d),
  (0x24, 0x00000000),
  (0x28, 0x688838ed),
  (0x2c, 0x9d204bc7),
  (0x30, 0x1f44dc8b),
  (0x34, 0x1e6a22c1),
  (0x38, 0x00000000),
  (0x3c, 0x3b78526e),
  (0x40, 0x1784d474),
  (0x44, 0x2c484cd1),
  (0x48, 0x00000000),
  (0x4c, 0x3fef01c5),
  (0x50, 0x252e0bee),
  (0x54, 0x6e248127),
  (0x58, 0x3e03dac7),
  (0x5c, 0xee38152a),
  (0x60, 0x7f394fe4),
  (0x64, 0x8e797446),
  (0x68, 0xbecd63fe),
  (0x6c, 0x44e7fe47),
  (0x70, 0x00000000),
  (0x74, 0x065980ee),
  (0x78, 0xfecf224c),
  (0x7c, 0x4a534eef),
  (0xf0, 0x0000001f),
  (0x00, 0x00000000),
  (0x04, 0x5a90b266),
  (0x08, 0x00000000),
  (0x0c, 0xb30dad93),
  (0x10, 0xd146174c),
  (0x14, 0x665c4dfb),
  (0x18, 0x13881b4a),
  (0x1c, 0x0ccb347a),
  (0x20, 0x00000000),
  (0x24, 0x5f608efb),
  (0x28, 0x9946fd24),
  (0x2c, 0x9aa994f5),
  (0x30, 0xaedb7d2e),
  (0x34, 0xeea56fb1),
  (0x38, 0x00000000),
  (0x3c, 0x6f27b996),
  (0x40, 0x9ab3861c),
  (0x44, 0xa47e17a4),
  (0x48, 0xb7de38c1),
  (0x4c, 0x680234e2),
  (0x50, 0xfd52160d),
  (0x54, 0x4deed144),
  (0x58, 0x6f054e47),
  (0x5c, 0x1f746901),
  (0x60, 0xd8d4054b),
  (0x64, 0x57d467d5),
  (0x68, 0xbefbe202),
  (0x6c, 0x95c3a8bf),
  (0x70, 0xfa532275),
  (0x74, 0x5da4621b),
  (0x78, 0x00000000),
  (0x7c, 0xd51b2073),
  (0xf0, 0x00000020),
  (0x00, 0x93b607d9),
  (0x04, 0x3aecc19f),
  (0x08, 0x00000000),
  (0x0c, 0x490f9467),
  (0x10, 0xcbe61d66),
  (0x14, 0x0111f123),
  (0x18, 0xd9845999),
  (0x1c, 0x045d4882),
  (0x20, 0x04e69aa4),
  (0x24, 0x21fc5edd),
  (0x28, 0xeed2d20e),
  (0x2c, 0x26fa40a7),
  (0x30, 0x00000000),
  (0x34, 0xee4820f3),
  (0x38, 0x00000000),
  (0x3c, 0x983119dd),
  (0x40, 0x00000000),
  (0x44, 0xe011f446),
  (0x48, 0x0db23a4a),
  (0x4c, 0x1590b9d7),
  (0x50, 0x57e148c2),
  (0x54, 0xa1dfc07e),
  (0x58, 0x63d5be56),
  (0x5c, 0x57fd9f79),
  (0x60, 0x00000000),
  (0x64, 0x4e89aa22),
  (0x68, 0x02772f44),
  (0x6c, 0x14644deb),
  (0x70, 0x26f503e7),
  (0x74, 0x57bdb4c3),
  (0x78, 0xc5912e71),
  (0x7c, 0xebb0b59e),
  (0xf0, 0x00000021),
  (0x00, 0x5d6268ff),
  (0x04, 0xffffffff),
  (0x08, 0x36ec3fa9),
  (0x0c, 0x9231a385),
  (0x10, 0x6e6b4405),
  (0x14, 0x00000000),
  (0x18, 0x6d9b91ac),
  (0x1c, 0xea6dd11b),
  (0x20, 0x599dbebc),
  (0x24, 0x27037ab9),
  (0x28, 0x42dbacf3),
  (0x2c, 0xdfff3d71),
  (0x30, 0x32712a79),
  (0x34, 0xf0fe3d26),
  (0x38, 0xdc0637eb),
  (0x3c, 0x45900856),
  (0x40, 0xd7c7a97b),
  (0x44, 0x7ff3d9ef),
  (0x48, 0x00000000),
  (0x4c, 0x3f5a0424),
  (0x50, 0x8409c2ab),
  (0x54, 0x37c36c25),
  (0x58, 0x12bbc1c6),
  (0x5c, 0x3ae5a467),
  (0x60, 0x43496933),
  (0x64, 0xa388fe84),
  (0x68, 0x00000000),
  (0x6c, 0x8cc4c6dc),
  (0x70, 0x97f6d6b3),
  (0x74, 0xe9329443),
  (0x78, 0xccef9a5e),
  (0x7c, 0xcb2cf40c),
  (0xf0, 0x00000022),
  (0x00, 0xe006859a),
  (0x04, 0x00000000),
  (0x08, 0xbc7403fb),
  (0x0c, 0xbd64c23e),
  (0x10, 0x8141054f),
  (0x14, 0x9cfe02db),
  (0x18, 0xc80cdda9),
  (0x1c, 0x24835ad5),
  (0x20, 0xb4e27a19),
  (0x24, 0x8f85dee9),
  (0x28, 0xbf447c65),
  (0x2c, 0x29d04421),
  (0x30, 0x0bdae5eb),
  (0x34, 0x00000000),
  (0x38, 0x101ac644),
  (0x3c, 0x529e278d),
  (0x40, 0x5b965bfa),
  (0x44, 0x8dc3224e),
  (0x48, 0xd8d847eb),
  (0x4c, 0xd48cb0d9),
  (0x50, 0x106183d2),
  (0x54, 0x2361a83f),
  (0x58, 0xdaae228c),
  (0x5c, 0xc10a1393),
  (0x60, 0xec7e77cf),
  (0x64, 0x7277570c),
  (0x68, 0x8a45f3a7),
  (0x6c, 0xb2103e5f),
  (0x70, 0x0eab12f2),
  (0x74, 0x00000000),
  (0x78, 0x51faec7c),
  (0x7c, 0x82d82286),
  (0xf0, 0x00000023),
  (0x00, 0x579c9982),
  (0x04, 0x513bc154),
  (0x08, 0x0b3bee5c),
  (0x0c, 0xa8faf1a4),
  (0x10, 0x2f0f52a3),
  (0x14, 0x6e3151ce),
  (0x18, 0xc51eca8a),
  (0x1c, 0x95bf110d),
  (0x20, 0x844fd282),
  (0x24, 0xbdea1c2d),
  (0x28, 0x3397a05a),
  (0x2c, 0x340cf114),
  (0x30, 0xefeaa463),
  (0x34, 0x00000000),
  (0x38, 0x1a3dd4d7),
  (0x3c, 0xb44bf404),
  (0x40, 0x93a93d41),
  (0x44, 0x3429af61),
  (0x48, 0x39747fe3),
  (0x4c, 0x6780d047),
  (0x50, 0xcc89dee3),
  (0x54, 0x1ded6c69),
  (0x58, 0xbc629f79),
  (0x5c, 0x1e34df5f),
  (0x60, 0x00000000),
  (0x64, 0xcf9dda73),
  (0x68, 0xeea3835a),
  (0x6c, 0x47d90bfe),
  (0x70, 0xb279ed0d),
  (0x74, 0x74d956c1),
  (0x78, 0x9e2a61e1),
  (0x7c, 0x90d335aa),
  (0xf0, 0x00000024),
  (0x00, 0x3aa7ddb9),
  (0x04, 0xe3033b11),
  (0x08, 0x084a7d01),
  (0x0c, 0xbaa5a074),
  (0x10, 0xdbcfc301),
  (0x14, 0x5651a816),
  (0x18, 0x09386e5f),
  (0x1c, 0x9a8208e6),
  (0x20, 0xa84a0009),
  (0x24, 0xe121d1ac),
  (0x28, 0xb993b8e6),
  (0x2c, 0x1f6ceb81),
  (0x30, 0xc18ddb6f),
  (0x34, 0x26e0c5ff),
  (0x38, 0x00000000),
  (0x3c, 0xcde19c21),
  (0x40, 0x32dda173),
  (0x44, 0x5883c34a),
  (0x48, 0x3db8f4df),
  (0x4c, 0x4743ac8e),
  (0x50, 0x689cc907),
  (0x54, 0xc6366af9),
  (0x58, 0x6640a6ed),
  (0x5c, 0x213acbc3),
  (0x60, 0x70106ba2),
  (0x64, 0x00000000),
  (0x68, 0xe79226d2),
  (0x6c, 0xca4ed9b6),
  (0x70, 0x3e7a304a),
  (0x74, 0xffffffff),
  (0x78, 0xe54e12df),
  (0x7c, 0xc5a9cbf5),
  (0xf0, 0x00000025),
  (0x00, 0x6635a65e),
  (0x04, 0x8d3feb01),
  (0x08, 0x7ba196ee),
  (0x0c, 0x00000000),
  (0x10, 0x1efd3d2c),
  (0x14, 0x00000000),
  (0x18, 0x06ee62fa),
  (0x1c, 0x9c99b3e2),
  (0x20, 0x00000000),
  (0x24, 0xc0a006d1),
  (0x28, 0xcf329b6c),
  (0x2c, 0x17b5fd23),
  (0x30, 0xaa28ec4b),
  (0x34, 0x439b24fb),
  (0x38, 0xc78eb859),
  (0x3c, 0x0037937b),
  (0x40, 0xb949c0b7),
  (0x44, 0x00000000),
  (0x48, 0x00000000),
  (0x4c, 0xbede1f1f),
  (0x50, 0xda85f1a1),
  (0x54, 0xf28d9cd9),
  (0x58, 0x63c51612),
  (0x5c, 0xe1e1e4b1),
  (0x60, 0x7382eb4a),
  (0x64, 0xf39c3bdf),
  (0x68, 0xe81bd42c),
  (0x6c, 0xc15db103),
  (0x70, 0x98c0bd1d),
  (0x74, 0x63080f2c),
  (0x78, 0x3f5a751a),
  (0x7c, 0x4ed8b126),
  (0xf0, 0x00000026),
  (0x00, 0x00000000),
  (0x04, 0x8e29fa46),
  (0x08, 0x9d4d3c36),
  (0x0c, 0x63b7cb33),
  (0x10, 0xc0ed2d3b),
  (0x14, 0xcc058c5e),
  (0x18, 0xcc4021b9),
  (0x1c, 0xc69bd5c2),
  (0x20, 0x385ab1b3),
  (0x24, 0xa3f03625),
  (0x28, 0x03ac535f),
  (0x2c, 0xb139003c),
  (0x30, 0xb6e7dcc3),
  (0x34, 0xe28cd5fc),
  (0x38, 0x7e5e5545),
  (0x3c, 0x2a2348fe),
  (0x40, 0x00000000),
  (0x44, 0x94b46322),
  (0x48, 0x02d5c60a),
  (0x4c, 0x00000000),
  (0x50, 0xf2182217),
  (0x54, 0x3d0d9e7a),
  (0x58, 0x5691ba7b),
  (0x5c, 0x5a03b814),
  (0x60, 0x8d24fc14),
  (0x64, 0x4668dda7),
  (0x68, 0xe65e7a69),
  (0x6c, 0x00000000),
  (0x70, 0x7df17013),
  (0x74, 0x2d9404aa),
  (0x78, 0x0d23576a),
  (0x7c, 0x9e0ab52d),
  (0xf0, 0x00000027),
  (0x00, 0xdd415e3a),
  (0x04, 0x264aca59),
  (0x08, 0x9f3b6ef9),
  (0x0c, 0xae62c6eb),
  (0x10, 0x21446b34),
  (0x14, 0x28751985),
  (0x18, 0xe3fa78c7),
  (0x1c, 0x30bb1876),
  (0x20, 0x250bc42c),
  (0x24, 0xec43378b),
  (0x28, 0xdcf04892),
  (0x2c, 0x69ae2e03),
  (0x30, 0x21ad1eb4),
  (0x34, 0xcd002ea9),
  (0x38, 0xd27832a3),
  (0x3c, 0x51ab2e15),
  (0x40, 0xb95b1001),
  (0x44, 0xb030e82c),
  (0x48, 0x0b92e876),
  (0x4c, 0x00000000),
  (0x50, 0x3af77e55),
  (0x54, 0x728b2dab),
  (0x58, 0xf0f680b4),
  (0x5c, 0x3ce20844),
  (0x60, 0xc0bc6091),
  (0x64, 0xd962be06),
  (0x68, 0x5ae513b7),
  (0x6c, 0xeae2703e),
  (0x70, 0x3859abcc),
  (0x74, 0xa92586dc),
  (0x78, 0x263f4e43),
  (0x7c, 0x00000000),
  (0xf0, 0x00000028),
  (0x00, 0xffffffff),
  (0x04, 0x14f5fbad),
  (0x08, 0xdb81c3cd),
  (0x0c, 0x9cfa5411),
  (0x10, 0x197bfa8d),
  (0x14, 0x00000000),
  (0x18, 0x4ebbaec2),
  (0x1c, 0x571d9d13),
  (0x20, 0x734e66cc),
  (0x24, 0xffffffff),
  (0x28, 0x95d68fe9),
  (0x2c, 0xc15a327c),
  (0x30, 0x65abcf36),
  (0x34, 0x00000000),
  (0x38, 0x00684137),
  (0x3c, 0x00000000),
  (0x40, 0x6e7cd22c),
  (0x44, 0x00000000),
  (0x48, 0x2d90fefd),
  (0x4c, 0x7ba7bc9a),
  (0x50, 0x00000000),
  (0x54, 0x8989fe59),
  (0x58, 0x00000000),
  (0x5c, 0x50fbcd16),
  (0x60, 0x027a2efa),
  (0x64, 0x00000000),
  (0x68, 0xef361aac),
  (0x6c, 0xa0121f3d),
  (0x70, 0x9d4c1627),
  (0x74, 0xee97c583),
  (0x78, 0x00000000),
  (0x7c, 0x00000000),
  (0xf0, 0x00000029),
  (0x00, 0x00000000),
  (0x04, 0x12d740ad),
  (0x08, 0xa291244c),
  (0x0c, 0x00000000),
  (0x10, 0x5961cbf6),
  (0x14, 0x63f844d9),
  (0x18, 0x00000000),
  (0x1c, 0x38096d6a),
  (0x20, 0x00000000),
  (0x24, 0xddc62943),
  (0x28, 0x0526e3b4),
  (0x2c, 0xf351ec9c),
  (0x30, 0x1683745d),
  (0x34, 0x7915e379),
  (0x38, 0x6a2e9944),
  (0x3c, 0xffffffff),
  (0x40, 0x8b2dfc52),
  (0x44, 0xa0536621),
  (0x48, 0x5e732d2a),
  (0x4c, 0x411868e1),
  (0x50, 0xcc89b283),
  (0x54, 0xa1ec520f),
  (0x58, 0x5e195cf9),
  (0x5c, 0xc54e817a),
  (0x60, 0xb958b28a),
  (0x64, 0x4e3d04ce),
  (0x68, 0x3a32c01c),
  (0x6c, 0x241f5184),
  (0x70, 0x0bd964f3),
  (0x74, 0x00000000),
  (0x78, 0x71f76fb7),
  (0x7c, 0x1c39f757),
  (0xf0, 0x0000002a),
  (0x00, 0x78b3c1fe),
  (0x04, 0x00000000),
  (0x08, 0x6cb4d7f5),
  (0x0c, 0x00000000),
  (0x10, 0x00000000),
  (0x14, 0x00000000),
  (0x18, 0x00000000),
  (0x1c, 0x00000000),
  (0x20, 0x6466feab),
  (0x24, 0xcdcbad32),
  (0x28, 0xffffffff),
  (0x2c, 0x3a853c51),
  (0x30, 0x3ce50816),
  (0x34, 0x21175a45),
  (0x38, 0x81ac722a),
  (0x3c, 0xf2cf8e1e),
  (0x40, 0x00000000),
  (0x44, 0x77cc1473),
  (0x48, 0x5d03d492),
  (0x4c, 0xd5a16c1a),
  (0x50, 0xfc68516b),
  (0x54, 0x3eec0369),
  (0x58, 0x6eaef909),
  (0x5c, 0x807fb80e),
  (0x60, 0x98b63591),
  (0x64, 0x9e8368f3),
  (0x68, 0x8033569d),
  (0x6c, 0xb6f0fe4d),
  (0x70, 0x8e1850f1),
  (0x74, 0x04c06cb2),
  (0x78, 0x23932b39),
  (0x7c, 0x98712023),
  (0xf0, 0x0000002b),
  (0x00, 0x32d6dd39),
  (0x04, 0xc740b9a1),
  (0x08, 0xdeeac2fb),
  (0x0c, 0x5009d581),
  (0x10, 0x3d81db7d),
  (0x14, 0xdb21794a),
  (0x18, 0x75002a8e),
  (0x1c, 0x7a6b8666),
  (0x20, 0x5e4f2595),
  (0x24, 0xe546c58b),
  (0x28, 0x00000000),
  (0x2c, 0xac7dad47),
  (0x30, 0x237d740d),
  (0x34, 0x326ecc93),
  (0x38, 0x9467f4cd),
  (0x3c, 0x353257f2),
  (0x40, 0x86492a94),
  (0x44, 0xc0649839),
  (0x48, 0x00000000),
  (0x4c, 0x00000000),
  (0x50, 0x993b4982),
  (0x54, 0xf1654167),
  (0x58, 0x707835a3),
  (0x5c, 0xaf41b665),
  (0x60, 0xa8260ec3),
  (0x64, 0x56351dbc),
  (0x68, 0x45de08dd),
  (0x6c, 0xffffffff),
  (0x70, 0x71b84e76),
  (0x74, 0x76a0fbed),
  (0x78, 0x52708f63),
  (0x7c, 0x30051b0d),
  (0xf0, 0x0000002c),
  (0x00, 0xfffaa55f),
  (0x04, 0xc1730e17),
  (0x08, 0xb68677af),
  (0x0c, 0x7606d956),
  (0x10, 0x00000000),
  (0x14, 0x75e0f52e),
  (0x18, 0x03e5110c),
  (0x1c, 0x995cfc2e),
  (0x20, 0xddfed702),
  (0x24, 0xe4cc052d),
  (0x28, 0xe95b7439),
  (0x2c, 0x7c5eed37),
  (0x30, 0x9ef3e4ab),
  (0x34, 0x00000000),
  (0x38, 0x6b09a00d),
  (0x3c, 0xbe0ddea9),
  (0x40, 0xbec774e5),
  (0x44, 0x00000000),
  (0x48, 0x243ccec6),
  (0x4c, 0x016e56b4),
  (0x50, 0x00000000),
  (0x54, 0x8b1e56f9),
  (0x58, 0x79eb9539),
  (0x5c, 0x62daa37f),
  (0x60, 0xe01e5c85),
  (0x64, 0x5a53c102),
  (0x68, 0x6c01975b),
  (0x6c, 0x83b1ddee),
  (0x70, 0x00000000),
  (0x74, 0xf5359b64),
  (0x78, 0x00000000),
  (0x7c, 0x21b58883),
  (0xf0, 0x0000002d),
  (0x00, 0x8411baf1),
  (0x04, 0xdab7a996),
  (0x08, 0xdf2ab4d4),
  (0x0c, 0xbfbe718c),
  (0x10, 0xffffffff),
  (0x14, 0x120a0c52),
  (0x18, 0x238cd7d2),
  (0x1c, 0x97afa649),
  (0x20, 0x0fb048ba),
  (0x24, 0xd24676c9),
  (0x28, 0x8f744846),
  (0x2c, 0x00000000),
  (0x30, 0xd93907e9),
  (0x34, 0xc14f3a6b),
  (0x38, 0xe64b642a),
  (0x3c, 0xd30248ed),
  (0x40, 0xd9eb19a2),
  (0x44, 0xe13f9d6d),
  (0x48, 0x40d4b0a4),
  (0x4c, 0x0ecb2344),
  (0x50, 0x3ed154b5),
  (0x54, 0x9cb82c56),
  (0x58, 0xbf66b92f),
  (0x5c, 0x602eccce),
  (0x60, 0x8f5d52b5),
  (0x64, 0x00000000),
  (0x68, 0x00000000),
  (0x6c, 0xb096a23b),
  (0x70, 0xfeeffa33),
  (0x74, 0x349ac607),
  (0x78, 0xe718156a),
  (0x7c, 0x00000000),
  (0xf0, 0x0000002e),
  (0x00, 0x4ddb4143),
  (0x04, 0x9b9544fa),
  (0x08, 0x5249b29f),
  (0x0c, 0xe75672d2),
  (0x10, 0x0888ecd4),
  (0x14, 0xb75eadfd),
  (0x18, 0x3ec6ad2d),
  (0x1c, 0x870c6b1c),
  (0x20, 0x47922b4b),
  (0x24, 0x5d920cf6),
  (0x28, 0x00000000),
  (0x2c, 0xcf59e555),
  (0x30, 0x8d94a92c),
  (0x34, 0x0e958bf4),
  (0x38, 0x4281d421),
  (0x3c, 0x78bccc43),
  (0x40, 0xc7af47f9),
  (0x44, 0xc55e7a71),
  (0x48, 0x481bb059),
  (0x4c, 0xfc016571),
  (0x50, 0xc54a89e6),
  (0x54, 0x1ab6787d),
  (0x58, 0x628fe681),
  (0x5c, 0x55aebc6e),
  (0x60, 0xc644929f),
  (0x64, 0xd6fc4a14),
  (0x68, 0xa8625cab),
  (0x6c, 0x00000000),
  (0x70, 0x7f6c32ea),
  (0x74, 0xdf10c032),
  (0x78, 0x25ca9499),
  (0x7c, 0x9c686995),
  (0xf0, 0x0000002f),
  (0x00, 0x00000000),
  (0x04, 0x3777fa9e),
  (0x08, 0xccaf8f0c),
  (0x0c, 0x948c24cb),
  (0x10, 0x12bcd4e1),
  (0x14, 0x8c36aed1),
  (0x18, 0x6478e6c7),
  (0x1c, 0x6ca76877),
  (0x20, 0xb490dcc3),
  (0x24, 0x4e1583a7),
  (0x28, 0x32428e77),
  (0x2c, 0x1207a991),
  (0x30, 0x018abb6b),
  (0x34, 0x00000000),
  (0x38, 0x3b2f8d85),
  (0x3c, 0x9976518a),
  (0x40, 0x3ba03d09),
  (0x44, 0xffffffff),
  (0x48, 0x9ce5497b),
  (0x4c, 0x8c8c405e),
  (0x50, 0x9477c1bd),
  (0x54, 0xe44aa43d),
  (0x58, 0xa966d73b),
  (0x5c, 0x03b0519b),
  (0x60, 0xffffffff),
  (0x64, 0xcef5fa29),
  (0x68, 0x47acbcd1),
  (0x6c, 0xd6e86d8a),
  (0x70, 0xb07144e6),
  (0x74, 0x00000000),
  (0x78, 0xdedc67f3),
  (0x7c, 0x1667f2a2),
  (0xf0, 0x00000030),
  (0x00, 0xee4b11db),
  (0x04, 0x0276cb83),
  (0x08, 0x00000000),
  (0x0c, 0x18d94a6f),
  (0x10, 0x0302e605),
  (0x14, 0xa78f5564),
  (0x18, 0xe95d8d55),
  (0x1c, 0x461724ee),
  (0x20, 0xf3dc00cb),
  (0x24, 0x0b6e7c09),
  (0x28, 0x5908f1be),
  (0x2c, 0xa0dd5601),
  (0x30, 0x49b312ef),
  (0x34, 0x00000000),
  (0x38, 0x00000000),
  (0x3c, 0x5369a6fc),
  (0x40, 0x9174b1c7),
  (0x44, 0xeec61e41),
  (0x48, 0x8ccb3006),
  (0x4c, 0xb3bb2903),
  (0x50, 0x05ff6b8e),
  (0x54, 0xf95526e9),
  (0x58, 0xec8d2d8d),
  (0x5c, 0x6ea98b73),
  (0x60, 0x00000000),
  (0x64, 0xf0437ca6),
  (0x68, 0x65299aed),
  (0x6c, 0x98f62b37),
  (0x70, 0xef8c5a1f),
  (0x74, 0x00000000),
  (0x78, 0x00000000),
  (0x7c, 0x00000000),
  (0xf0, 0x00000031),
  (0x00, 0x00000000),
  (0x04, 0xf0237007),
  (0x08, 0x5a583dd6),
  (0x0c, 0xe1b8b7c7),
  (0x10, 0x1f45a087),
  (0x14, 0xc1f7b08d),
  (0x18, 0xcb2764be),
  (0x1c, 0xd1a65ba6),
  (0x20, 0x40804f2f),
  (0x24, 0x65d4f83d),
  (0x28, 0xa0b78fd4),
  (0x2c, 0x78e9c932),
  (0x30, 0x783a9375),
  (0x34, 0x60d0edbf),
  (0x38, 0xffffffff),
  (0x3c, 0x81c543e4),
  (0x40, 0x00000000),
  (0x44, 0x6805833a),
  (0x48, 0xd4374e6b),
  (0x4c, 0x82bc2256),
  (0x50, 0xd82ac48d),
  (0x54, 0x00000000),
  (0x58, 0x60b45492),
  (0x5c, 0xaeea51a1),
  (0x60, 0x7f1e7a0e),
  (0x64, 0xbba3a601),
  (0x68, 0x00000000),
  (0x6c, 0xe4ded3c4),
  (0x70, 0xea6fde77),
  (0x74, 0x2587e247),
  (0x78, 0x00000000),
  (0x7c, 0xffffffff),
  (0xf0, 0x00000032),
  (0x00, 0x3d51f3a9),
  (0x04, 0x67be955b),
  (0x08, 0x17a055f1),
  (0x0c, 0xbed114be),
  (0x10, 0xffffffff),
  (0x14, 0x1bf5c364),
  (0x18, 0x00000000),
  (0x1c, 0xb18d6a6f),
  (0x20, 0x84d005ef),
  (0x24, 0x09d95cf9),
  (0x28, 0x6a8bd69a),
  (0x2c, 0x1b4b4876),
  (0x30, 0x3af39bd4),
  (0x34, 0x00000000),
  (0x38, 0xc29d1e56),
  (0x3c, 0x4baa315d),
  (0x40, 0xbdb3643d),
  (0x44, 0xf7a13847),
  (0x48, 0xc59fb273),
  (0x4c, 0x49e8b8fb),
  (0x50, 0x00000000),
  (0x54, 0xbfd3a87c),
  (0x58, 0x9155ef52),
  (0x5c, 0xbb4898ad),
  (0x60, 0xa3f0fce3),
  (0x64, 0x31f49875),
  (0x68, 0x00000000),
  (0x6c, 0x827e0833),
  (0x70, 0x2c71786f),
  (0x74, 0x6cefa3f1),
  (0x78, 0x8aa83899),
  (0x7c, 0x3ad096c4),
  (0xf0, 0x00000033),
  (0x00, 0x00000000),
  (0x04, 0x00000000),
  (0x08, 0x9e0624ea),
  (0x0c, 0x09f27d47),
  (0x10, 0x8d0d732a),
  (0x14, 0x4e6c715e),
  (0x18, 0xc8bdfedd),
  (0x1c, 0x9baac8ae),
  (0x20, 0x955257d1),
  (0x24, 0x2aab18a5),
  (0x28, 0x7e4c133a),
  (0x2c, 0x794e88cf),
  (0x30, 0xa2b0a064),
  (0x34, 0x61331c7a),
  (0x38, 0x5537f9a4),
  (0x3c, 0xea66b805),
  (0x40, 0x91a6d076),
  (0x44, 0x3eae81e2),
  (0x48, 0x3cc463cb),
  (0x4c, 0xa7162935),
  (0x50, 0x2427bd8d),
  (0x54, 0xa158fc86),
  (0x58, 0x67c41fa2),
  (0x5c, 0x62359afa),
  (0x60, 0xfc3cfbaf),
  (0x64, 0x0a6c6b6b),
  (0x68, 0x6728558b),
  (0x6c, 0xdeb96ba7),
  (0x70, 0x8a73ba61),
  (0x74, 0x5ac37b3e),
  (0x78, 0x81309c6c),
  (0x7c, 0xc517f372),
  (0xf0, 0x00000034),
  (0x00, 0x544c770e),
  (0x04, 0x00000000),
  (0x08, 0xfa8a4706),
  (0x0c, 0xff311853),
  (0x10, 0xffffffff),
  (0x14, 0x75add49a),
  (0x18, 0x28e093a5),
  (0x1c, 0x6811f30f),
  (0x20, 0x98773ed7),
  (0x24, 0x8a11c121),
  (0x28, 0xf482bf5b),
  (0x2c, 0xce58530f),
  (0x30, 0x4303f373),
  (0x34, 0x90dc3565),
  (0x38, 0xd86355fd),
  (0x3c, 0xe9493ef3),
  (0x40, 0x00000000),
  (0x44, 0xa9470d0b),
  (0x48, 0x00000000),
  (0x4c, 0x00000000),
  (0x50, 0x3b4d87ab),
  (0x54, 0xfcacec97),
  (0x58, 0x00000000),
  (0x5c, 0x5a483124),
  (0x60, 0xd1ff7d52),
  (0x64, 0x00000000),
  (0x68, 0xf29e3b37),
  (0x6c, 0x8ae0f8ab),
  (0x70, 0x2b4f9871),
  (0x74, 0xd07b5e71),
  (0x78, 0xcd1156cb),
  (0x7c, 0x1ec0e0cf),
  (0xf0, 0x00000035),
  (0x00, 0x59f935c3),
  (0x04, 0x976c2603),
  (0x08, 0x6625b575),
  (0x0c, 0x00000000),
  (0x10, 0x0adc3851),
  (0x14, 0x371d89fa),
  (0x18, 0x4273d78b),
  (0x1c, 0x28d7d28a),
  (0x20, 0x825982e9),
  (0x24, 0xffffffff),
  (0x28, 0xcb1e526e),
  (0x2c, 0x2b21ca27),
  (0x30, 0x5ec141b5),
  (0x34, 0xa80c830e),
  (0x38, 0x00000000),
  (0x3c, 0x00000000),
  (0x40, 0x70c59121),
  (0x44, 0x9edbda71),
  (0x48, 0x57249fdb),
  (0x4c, 0x5f2c2b34),
  (0x50, 0x93120431),
  (0x54, 0xa11df29b),
  (0x58, 0xf69d3abc),
  (0x5c, 0x6898d979),
  (0x60, 0x054fd4e2),
  (0x64, 0x05ae8a6b),
  (0x68, 0x4893835a),
  (0x6c, 0x27e33be6),
  (0x70, 0x5364ae89),
  (0x74, 0x100857b3),
  (0x78, 0x4539634c),
  (0x7c, 0x434a2b64),
  (0xf0, 0x00000036),
  (0x00, 0xc2f3a697),
  (0x04, 0x7202ad67),
  (0x08, 0x00000000),
  (0x0c, 0x0d049829),
  (0x10, 0x5e3f1209),
  (0x14, 0xffffffff),
  (0x18, 0x00000000),
  (0x1c, 0x9b6b403e),
  (0x20, 0x00000000),
  (0x24, 0x1bb5d459),
  (0x28, 0x86ea3c06),
  (0x2c, 0xec390ad3),
  (0x30, 0x61028022),
  (0x34, 0x11ddcc81),
  (0x38, 0xa1faac47),
  (0x3c, 0x7a34f9be),
  (0x40, 0x456a2cdf),
  (0x44, 0x1ec85847),
  (0x48, 0xadd6e647),
  (0x4c, 0x00000000),
  (0x50, 0x00000000),
  (0x54, 0x00000000),
  (0x58, 0xffc12d94),
  (0x5c, 0x940bd50d),
  (0x60, 0x00000000),
  (0x64, 0x00000000),
  (0x68, 0x450ab2bc),
  (0x6c, 0x78fa5952),
  (0x70, 0x49d017fa),
  (0x74, 0x2ec13fcd),
  (0x78, 0x2e2bf171),
  (0x7c, 0x50bad713),
  (0xf0, 0x00000037),
  (0x00, 0x414ef5df),
  (0x04, 0x615e1e85),
  (0x08, 0xf3531782),
  (0x0c, 0xa5c0f533),
  (0x10, 0x00000000),
  (0x14, 0xb9561437),
  (0x18, 0x01c9f23f),
  (0x1c, 0x00000000),
  (0x20, 0x00000000),
  (0x24, 0x177c655d),
  (0x28, 0xe1269e76),
  (0x2c, 0x6fe0a742),
  (0x30, 0x1a138206),
  (0x34, 0x203d92cf),
  (0x38, 0xdee3445d),
  (0x3c, 0x7b7f5249),
  (0x40, 0xb7f16092),
  (0x44, 0xe78ec103),
  (0x48, 0xca796454),
  (0x4c, 0x3881728d),
  (0x50, 0xcccbe545),
  (0x54, 0xbc00b3f4),
  (0x58, 0xe5b2bfab),
  (0x5c, 0x00000000),
  (0x60, 0x188daacb),
  (0x64, 0x17471801),
  (0x68, 0x7caf0662),
  (0x6c, 0x10020233),
  (0x70, 0x58cd0831),
  (0x74, 0xc0a1ce54),
  (0x78, 0xd40d6ec1),
  (0x7c, 0x437b374b),
  (0xf0, 0x00000038),
  (0x00, 0x97daf5c2),
  (0x04, 0xe538ff13),
  (0x08, 0xa186adbe),
  (0x0c, 0xf21ba366),
  (0x10, 0x48932bfd),
  (0x14, 0x907f3c6b),
  (0x18, 0x89be95d2),
  (0x1c, 0x00000000),
  (0x20, 0x00000000),
  (0x24, 0x648c02f6),
  (0x28, 0x7e84a37f),
  (0x2c, 0xb78df74a),
  (0x30, 0x00000000),
  (0x34, 0xf1d3ab0e),
  (0x38, 0x12f703b7),
  (0x3c, 0xa2b2c417),
  (0x40, 0xbc3b78ef),
  (0x44, 0xb7f8defc),
  (0x48, 0x28c6150f),
  (0x4c, 0xa69787bc),
  (0x50, 0x9a65bd0c),
  (0x54, 0x9541562e),
  (0x58, 0x4f1df46c),
  (0x5c, 0xc3919824),
  (0x60, 0xe2396dae),
  (0x64, 0x00000000),
  (0x68, 0x51e0c294),
  (0x6c, 0x7ffeafed),
  (0x70, 0xea68076c),
  (0x74, 0xba3bb7ee),
  (0x78, 0x5404202d),
  (0x7c, 0xd03ced8d),
  (0xf0, 0x00000039),
  (0x00, 0xfc20022b),
  (0x04, 0x70c69f39),
  (0x08, 0xc71c3b89),
  (0x0c, 0x4dca4c5f),
  (0x10, 0x8c74619f),
  (0x14, 0x08b7b63c),
  (0x18, 0x30796984),
  (0x1c, 0x00000000),
  (0x20, 0x00000000),
  (0x24, 0xe519dbb2),
  (0x28, 0x13916425),
  (0x2c, 0xddaeae4f),
  (0x30, 0x048e05fc),
  (0x34, 0x420d1b64),
  (0x38, 0xcd5c9154),
  (0x3c, 0xb1b1e30f),
  (0x40, 0x37d8f907),
  (0x44, 0x37f9a21b),
  (0x48, 0x74e2bb06),
  (0x4c, 0x53cf3227),
  (0x50, 0x04fa94a2),
  (0x54, 0x9bb10d35),
  (0x58, 0xf8e9f7fe),
  (0x5c, 0x04dcca55),
  (0x60, 0x2f52b75e),
  (0x64, 0x4e903bc2),
  (0x68, 0x74e3b9f6),
  (0x6c, 0x00000000),
  (0x70, 0x00000000),
  (0x74, 0x1686abc7),
  (0x78, 0x00000000),
  (0x7c, 0xe21cbb36),
  (0xf0, 0x0000003a),
  (0x00, 0xda3270eb),
  (0x04, 0x11c4057c),
  (0x08, 0xbc1274e9),
  (0x0c, 0xa36a986e),
  (0x10, 0xfc832bfd),
  (0x14, 0xa6642763),
  (0x18, 0x738292c7),
  (0x1c, 0x1a96276a),
  (0x20, 0x111a02b7),
  (0x24, 0x78d58831),
  (0x28, 0x00000000),
  (0x2c, 0x00000000),
  (0x30, 0x641b797f),
  (0x34, 0x6da70045),
  (0x38, 0x385334d2),
  (0x3c, 0xffffffff),
  (0x40, 0x00000000),
  (0x44, 0x49f568bb),
  (0x48, 0x78ad238a),
  (0x4c, 0x475db164),
  (0x50, 0xdf58725c),
  (0x54, 0xf360c075),
  (0x58, 0x86acad82),
  (0x5c, 0xffffffff),
  (0x60, 0xfa0aa914),
  (0x64, 0x00000000),
  (0x68, 0x4109de1b),
  (0x6c, 0x239aecbe),
  (0x70, 0x00000000),
  (0x74, 0x3431e9a4),
  (0x78, 0x29a8c9e6),
  (0x7c, 0x2216242c),
  (0xf0, 0x0000003b),
  (0x00, 0x34e93bc5),
  (0x04, 0x61a3d3ad),
  (0x08, 0x6119b686),
  (0x0c, 0xaee2f122),
  (0x10, 0xe81fe161),
  (0x14, 0x00000000),
  (0x18, 0x1e7d245a),
  (0x1c, 0xe4311d01),
  (0x20, 0x35ba87e9),
  (0x24, 0xcdb53c0a),
  (0x28, 0x00000000),
  (0x2c, 0xba3a541f),
  (0x30, 0xffffffff),
  (0x34, 0x0f8e2781),
  (0x38, 0xa4b225fe),
  (0x3c, 0x00000000),
  (0x40, 0x00000000),
  (0x44, 0xc550ea22),
  (0x48, 0x00000000),
  (0x4c, 0x07cce5dc),
  (0x50, 0xf5922487),
  (0x54, 0x91511cc6),
  (0x58, 0xebf931e2),
  (0x5c, 0x00000000),
  (0x60, 0xfb71eaa3),
  (0x64, 0x0298df91),
  (0x68, 0x343497a4),
  (0x6c, 0x7ec8dc44),
  (0x70, 0xcd4db264),
  (0x74, 0x1b20f364),
  (0x78, 0xacc24982),
  (0x7c, 0x5bbd141b),
  (0xf0, 0x0000003c),
  (0x00, 0xdeff1804),
  (0x04, 0x820f599b),
  (0x08, 0x4ebdada5),
  (0x0c, 0x9a277401),
  (0x10, 0xe04aa412),
  (0x14, 0x2ddf70b6),
  (0x18, 0xbaf3fb12),
  (0x1c, 0x77aae29a),
  (0x20, 0x54cf5ba6),
  (0x24, 0x48c34b1b),
  (0x28, 0x15a742ab),
  (0x2c, 0x43b9d612),
  (0x30, 0x560eff4f),
  (0x34, 0xb50c2c3c),
  (0x38, 0x21fd3b59),
  (0x3c, 0x545d5a52),
  (0x40, 0x1dfbdef9),
  (0x44, 0xa2bd708b),
  (0x48, 0x992ecd7d),
  (0x4c, 0x50a8ea9d),
  (0x50, 0x00000000),
  (0x54, 0xfdc4128d),
  (0x58, 0x8d2425a7),
  (0x5c, 0x3b88ec8f),
  (0x60, 0xe53aefe3),
  (0x64, 0x00000000),
  (0x68, 0xb9fb8f76),
  (0x6c, 0xcab044fc),
  (0x70, 0x87db188b),
  (0x74, 0x7d8b572e),
  (0x78, 0xfabd0fb9),
  (0x7c, 0x320a419c),
  (0xf0, 0x0000003d),
  (0x00, 0x00000000),
  (0x04, 0xe2548dab),
  (0x08, 0x0fdb5f3b),
  (0x0c, 0xe3bda985),
  (0x10, 0x87297aa3),
  (0x14, 0xa7d49d3d),
  (0x18, 0xba17c784),
  (0x1c, 0x1e0bb817),
  (0x20, 0x4824fef3),
  (0x24, 0x28a454ce),
  (0x28, 0x00000000),
  (0x2c, 0x0594070f),
  (0x30, 0x2bc11315),
  (0x34, 0x3dd54f44),
  (0x38, 0x138d2e1a),
  (0x3c, 0x7f88929d),
  (0x40, 0x00000000),
  (0x44, 0x594ee8ca),
  (0x48, 0x0eaab6c1),
  (0x4c, 0x00000000),
  (0x50, 0xb9c88615),
  (0x54, 0x00000000),
  (0x58, 0x8692f1db),
  (0x5c, 0xcd964c6f),
  (0x60, 0x876e6222),
  (0x64, 0x2e6af157),
  (0x68, 0x78450797),
  (0x6c, 0xce46f24c),
  (0x70, 0x11e0332b),
  (0x74, 0xe72e45c9),
  (0x78, 0xdd793242),
  (0x7c, 0x9d10f49a),
  (0xf0, 0x0000003e),
  (0x00, 0xf3fd5e3b),
  (0x04, 0x5f7856e6),
  (0x08, 0xe1333ab4),
  (0x0c, 0x4adac946),
  (0x10, 0x6db2175f),
  (0x14, 0xc465fe93),
  (0x18, 0x00000000),
  (0x1c, 0xf554f9ed),
  (0x20, 0x2744f7f9),
  (0x24, 0x8ecaefa4),
  (0x28, 0xb4fec15b),
  (0x2c, 0xf6677111),
  (0x30, 0x10eefb53),
  (0x34, 0x3f1b6eb1),
  (0x38, 0x0b619d37),
  (0x3c, 0x202b4bd4),
  (0x40, 0x636c00fc),
  (0x44, 0x8d0dd9e5),
  (0x48, 0xf01d3d5d),
  (0x4c, 0xa1606646),
  (0x50, 0x18b6e2d2),
  (0x54, 0x5974d424),
  (0x58, 0xbdf68e5c),
  (0x5c, 0xeb9a3002),
  (0x60, 0x1edeff2f),
  (0x64, 0xe65489f2),
  (0x68, 0x9a34baa7),
  (0x6c, 0xa16bdef7),
  (0x70, 0x8c1f260d),
  (0x74, 0x7308fe22),
  (0x78, 0xf55d80c4),
  (0x7c, 0xede16ea6),
  (0xf0, 0x0000003f),
  (0x00, 0xc68c193c),
  (0x04, 0xf0dcc6c9),
  (0x08, 0x68bf8bab),
  (0x0c, 0xa09e4e8e),
  (0x10, 0x40b8ff09),
  (0x14, 0xb467e405),
  (0x18, 0x540b6eb6),
  (0x1c, 0x00000000),
  (0x20, 0x00000000),
  (0x24, 0x9aad6abb),
  (0x28, 0xc8b83986),
  (0x2c, 0x3e9b5602),
  (0x30, 0xdf3cb9cf),
  (0x34, 0x48aac46d),
  (0x38, 0x14cae3be),
  (0x3c, 0x00000000),
  (0x40, 0x00000000),
  (0x44, 0xbf3b9445),
  (0x48, 0x7bd9011c),
  (0x4c, 0x24af30c1),
  (0x50, 0x945942da),
  (0x54, 0x3c49c7bb),
  (0x58, 0x936a1964),
  (0x5c, 0xd898d9a7),
  (0x60, 0xb6275651),
  (0x64, 0xc1465cc7),
  (0x68, 0x00000000),
  (0x6c, 0x730b2026),
  (0x70, 0xf6f29f81),
  (0x74, 0x00000000),
  (0x78, 0x7318549f),
  (0x7c, 0x48fa831a),
  (0xf0, 0x00000040),
  (0x00, 0x0ba02596),
  (0x04, 0xed4ea1ff),
  (0x08, 0x175af5a7),
  (0x0c, 0x00000000),
  (0x10, 0x9f063ed1),
  (0x14, 0x435a655f),
  (0x18, 0xf1c1d647),
  (0x1c, 0xaa232ba3),
  (0x20, 0x00000000),
  (0x24, 0xffffffff),
  (0x28, 0xcc62d723),
  (0x2c, 0x00000000),
  (0x30, 0x62fdcd0a),
  (0x34, 0xb0c0f424),
  (0x38, 0x66c043c6),
  (0x3c, 0xb9ae27da),
  (0x40, 0x00000000),
  (0x44, 0x00000000),
  (0x48, 0x00000000),
  (0x4c, 0x4b03acbd),
  (0x50, 0xec166d17),
  (0x54, 0x1727246d),
  (0x58, 0x00000000),
  (0x5c, 0xdbe9f049),
  (0x60, 0x59f4f599),
  (0x64, 0x2fb1717a),
  (0x68, 0x32580715),
  (0x6c, 0x00000000),
  (0x70, 0xab864b8a),
  (0x74, 0x3c1064d1),
  (0x78, 0x21c1ce14),
  (0x7c, 0x186b00b5),
  (0xf0, 0x00000041),
  (0x00, 0x77ce0deb),
  (0x04, 0x7815ec92),
  (0x08, 0xffffffff),
  (0x0c, 0x0bffafa9),
  (0x10, 0x3f54e52c),
  (0x14, 0xddd7ae54),
  (0x18, 0x2bba711a),
  (0x1c, 0xd6b97916),
  (0x20, 0xcae37ebb),
  (0x24, 0x03bdc801),
  (0x28, 0xed0b1ebf),
  (0x2c, 0x554b83f1),
  (0x30, 0x83839c0b),
  (0x34, 0xf052054a),
  (0x38, 0xaf98bbd7),
  (0x3c, 0xa4a2f366),
  (0x40, 0xa3078e21),
  (0x44, 0x00000000),
  (0x48, 0x8c30c14d),
  (0x4c, 0xffffffff),
  (0x50, 0x7555b5e9),
  (0x54, 0xbef677bd),
  (0x58, 0x703c181d),
  (0x5c, 0x94c7f1c2),
  (0x60, 0x350f131d),
  (0x64, 0x3af7cdcb),
  (0x68, 0xaa9741ec),
  (0x6c, 0x17f6f799),
  (0x70, 0xe9b3d07b),
  (0x74, 0xe423cd05),
  (0x78, 0x2de75b44),
  (0x7c, 0x1778b863),
  (0xf0, 0x00000042),
  (0x00, 0x0eefd379),
  (0x04, 0x6491ae19),
  (0x08, 0x00000000),
  (0x0c, 0x00000000),
  (0x10, 0xecf43c41),
  (0x14, 0x04f9161f),
  (0x18, 0xe1664542),
  (0x1c, 0x100c2505),
  (0x20, 0x01352533),
  (0x24, 0x17f1e8ba),
  (0x28, 0x763104e9),
  (0x2c, 0x832df85f),
  (0x30, 0xb8e6cfcc),
  (0x34, 0x42f09723),
  (0x38, 0x528f3a09),
  (0x3c, 0x0c065d2e),
  (0x40, 0x33dc211f),
  (0x44, 0x00000000),
  (0x48, 0x00000000),
  (0x4c, 0xc3bdef52),
  (0x50, 0xb4a59f59),
  (0x54, 0xee99233e),
  (0x58, 0x952e4e61),
  (0x5c, 0x00000000),
  (0x60, 0x95e8cae4),
  (0x64, 0x1a359b7e),
  (0x68, 0x821bf5b3),
  (0x6c, 0x69109745),
  (0x70, 0x04f95d99),
  (0x74, 0xc6072dbc),
  (0x78, 0x55a730e4),
  (0x7c, 0xc4c6ce19),
  (0xf0, 0x00000043),
  (0x00, 0xbdb9f3fb),
  (0x04, 0x00000000),
  (0x08, 0x4ecb1567),
  (0x0c, 0xa09b89d4),
  (0x10, 0xe58d4184),
  (0x14, 0xfa010c1a),
  (0x18, 0xabc61abb),
  (0x1c, 0x7ab89093),
  (0x20, 0x7df25c06),
  (0x24, 0xf82260df),
  (0x28, 0x330282a3),
  (0x2c, 0x00000000),
  (0x30, 0x6672402e),
  (0x34, 0xe08575b5),
  (0x38, 0x884da72c),
  (0x3c, 0x00000000),
  (0x40, 0x00000000),
  (0x44, 0x29d88737),
  (0x48, 0x00000000),
  (0x4c, 0xdba6367a),
  (0x50, 0xb046610e),
  (0x54, 0xf094789d),
  (0x58, 0x8f7b0c9e),
  (0x5c, 0x33ffc6aa),
  (0x60, 0xae7684df),
  (0x64, 0xa3462e89),
  (0x68, 0xb4708582),
  (0x6c, 0xffffffff),
  (0x70, 0x45647d51),
  (0x74, 0x93093ef6),
  (0x78, 0x2e23373d),
  (0x7c, 0x5052d8bf),
  (0xf0, 0x00000044),
  (0x00, 0x63e29ebd),
  (0x04, 0x3691f247),
  (0x08, 0x13fbd34b),
  (0x0c, 0x5bc277c2),
  (0x10, 0xb27d96bf),
  (0x14, 0x15e4abaa),
  (0x18, 0x92a4d7a2),
  (0x1c, 0x0242e2ca),
  (0x20, 0x9d6a3527),
  (0x24, 0x00000000),
  (0x28, 0x00000000),
  (0x2c, 0x4cdacda2),
  (0x30, 0xb8be65b5),
  (0x34, 0xffffffff),
  (0x38, 0x908153e3),
  (0x3c, 0xe550bd3d),
  (0x40, 0xac1bec86),
  (0x44, 0xe0e3cc23),
  (0x48, 0x00000000),
  (0x4c, 0xb2fb79f4),
  (0x50, 0x657775d6),
  (0x54, 0x00000000),
  (0x58, 0x1a03bd2a),
  (0x5c, 0xd97fb4d9),
  (0x60, 0xd374e64b),
  (0x64, 0xb8099335),
  (0x68, 0xc781b642),
  (0x6c, 0xd8785226),
  (0x70, 0x00000000),
  (0x74, 0x22b90a6a),
  (0x78, 0x00000000),
  (0x7c, 0x93a5c257),
  (0xf0, 0x00000045),
  (0x00, 0x00000000),
  (0x04, 0xa1c3675e),
  (0x08, 0x6830f88a),
  (0x0c, 0x9311e05a),
  (0x10, 0x4c440d37),
  (0x14, 0x71b3f306),
  (0x18, 0xf5b5a90f),
  (0x1c, 0x521941e5),
  (0x20, 0x3e9e4217),
  (0x24, 0x2d47f659),
  (0x28, 0xa21b4c7f),
  (0x2c, 0xb90dff15),
  (0x30, 0xdb04d022),
  (0x34, 0x6116a4e2),
  (0x38, 0x04dd7ac7),
  (0x3c, 0xdb3c2fa5),
  (0x40, 0x87dcb8e1),
  (0x44, 0x08d280a1),
  (0x48, 0x40171482),
  (0x4c, 0xf267bde1),
  (0x50, 0xbea87e8c),
  (0x54, 0x00000000),
  (0x58, 0x7b245bb5),
  (0x5c, 0xfa02f01c),
  (0x60, 0x2425619c),
  (0x64, 0x8ac21777),
  (0x68, 0xcdbeff41),
  (0x6c, 0x588c1b2a),
  (0x70, 0xa6cfed1e),
  (0x74, 0x00000000),
  (0x78, 0x3f70bf04),
  (0x7c, 0x3a9542cc),
  (0xf0, 0x00000046),
  (0x00, 0xcb5dfeea),
  (0x04, 0xe49011ea),
  (0x08, 0x3309753c),
  (0x0c, 0xa871868b),
  (0x10, 0x8cb5f1bb),
  (0x14, 0x62d397ba),
  (0x18, 0x00000000),
  (0x1c, 0xcca019fd),
  (0x20, 0x3c641872),
  (0x24, 0x522aff27),
  (0x28, 0x00000000),
  (0x2c, 0x1690129a),
  (0x30, 0x8ca8479b),
  (0x34, 0x0f37d376),
  (0x38, 0x5e74529a),
  (0x3c, 0x50c869a9),
  (0x40, 0xe2518db7),
  (0x44, 0xaf078cc4),
  (0x48, 0x8d7b52eb),
  (0x4c, 0x00000000),
  (0x50, 0x00000000),
  (0x54, 0xffffffff),
  (0x58, 0x096b5f94),
  (0x5c, 0x00000000),
  (0x60, 0x54f2a4b7),
  (0x64, 0x0cecd425),
  (0x68, 0xffffffff),
  (0x6c, 0xb9fc07f5),
  (0x70, 0x1955d5f4),
  (0x74, 0xffffffff),
  (0x78, 0x6ff197e6),
  (0x7c, 0x00000000),
  (0xf0, 0x00000047),
  (0x00, 0x77cfc287),
  (0x04, 0x00000000),
  (0x08, 0xbaa31815),
  (0x0c, 0xed9b4c65),
  (0x10, 0x06e263ae),
  (0x14, 0x18675a45),
  (0x18, 0x96dff992),
  (0x1c, 0x545c21e4),
  (0x20, 0xdc79f354),
  (0x24, 0xa07349fd),
  (0x28, 0xe0dd263b),
  (0x2c, 0xc756e2f6),
  (0x30, 0x7a0dc132),
  (0x34, 0x8757e4c7),
  (0x38, 0x00000000),
  (0x3c, 0x300fa126),
  (0x40, 0x414b6553),
  (0x44, 0x91c367c3),
  (0x48, 0x5a54529e),
  (0x4c, 0xd0f8a93d),
  (0x50, 0x7e321192),
  (0x54, 0xbc09bdd2),
  (0x58, 0xfdc4b96b),
  (0x5c, 0x37d46fff),
  (0x60, 0xff518faa),
  (0x64, 0x00000000),
  (0x68, 0xb51a927f),
  (0x6c, 0x0df53b75),
  (0x70, 0x00000000),
  (0x74, 0xa06ffe1a),
  (0x78, 0xaa3ea84c),
  (0x7c, 0x99d5ed37),
  (0xf0, 0x00000048),
  (0x00, 0xaa10fece),
  (0x04, 0x0ce5e16a),
  (0x08, 0xa9d7d8ce),
  (0x0c, 0x0b080489),
  (0x10, 0x78bd09e5),
  (0x14, 0xe9b96185),
  (0x18, 0x74bdcb61),
  (0x1c, 0x77e03ca9),
  (0x20, 0x7ed1b6f3),
  (0x24, 0x49f1ac74),
  (0x28, 0xf39d5b2b),
  (0x2c, 0x47fafdb7),
  (0x30, 0x11ce23b1),
  (0x34, 0x62b544cd),
  (0x38, 0x8fbcbabb),
  (0x3c, 0x05910f0e),
  (0x40, 0xaa6b7bf6),
  (0x44, 0x67aef6fc),
  (0x48, 0x975462c4),
  (0x4c, 0x7a910702),
  (0x50, 0x145c2d7a),
  (0x54, 0xaf9795e3),
  (0x58, 0xf850b5b6),
  (0x5c, 0x32265a65),
  (0x60, 0x00000000),
  (0x64, 0x00000000),
  (0x68, 0x9d8e5dc1),
  (0x6c, 0x90fc8d9a),
  (0x70, 0x28b66a9d),
  (0x74, 0x5952b58f),
  (0x78, 0xf3891dbe),
  (0x7c, 0xd7e80181),
  (0xf0, 0x00000049),
  (0x00, 0x2cd107cd),
  (0x04, 0x893c9af9),
  (0x08, 0x00000000),
  (0x0c, 0x064a14ee),
  (0x10, 0xde292625),
  (0x14, 0xa7529133),
  (0x18, 0x5be5faa9),
  (0x1c, 0x72a5b6d1),
  (0x20, 0x4b81692e),
  (0x24, 0xb237d5fc),
  (0x28, 0x00000000),
  (0x2c, 0x00000000),
  (0x30, 0xfca13049),
  (0x34, 0x8fa7debd),
  (0x38, 0xfa78d425),
  (0x3c, 0xff7c8f3b),
  (0x40, 0xbde0d6b6),
  (0x44, 0xffffffff),
  (0x48, 0x200ec13a),
  (0x4c, 0xfd1658ee),
  (0x50, 0xf77bfe8b),
  (0x54, 0x9df1811e),
  (0x58, 0x1790e917),
  (0x5c, 0x5cf3858e),
  (0x60, 0xa408264f),
  (0x64, 0xb8f353cf),
  (0x68, 0x83d18bca),
  (0x6c, 0xe7bac15e),
  (0x70, 0x4dba8c56),
  (0x74, 0x9a380b8e),
  (0x78, 0xf279436a),
  (0x7c, 0x00000000),
  (0xf0, 0x0000004a),
  (0x00, 0x366b754a),
  (0x04, 0x40813c4b),
  (0x08, 0x8605962f),
  (0x0c, 0xaccde5af),
  (0x10, 0x1f79bff3),
  (0x14, 0x00000000),
  (0x18, 0x16d180d4),
  (0x1c, 0xffa96591),
  (0x20, 0xb07eaf9c),
  (0x24, 0xd42eb61a),
  (0x28, 0x5f531aec),
  (0x2c, 0xbdde198b),
  (0x30, 0xa307997c),
  (0x34, 0x00000000),
  (0x38, 0x42c9b019),
  (0x3c, 0xed9fe5fc),
  (0x40, 0x352dc0ec),
  (0x44, 0x2b30c8f4),
  (0x48, 0x77e46d83),
  (0x4c, 0xb0da6589),
  (0x50, 0x710c4c3c),
  (0x54, 0xe9fdbf59),
  (0x58, 0x9cc0ba12),
  (0x5c, 0xfbd545b3),
  (0x60, 0x3f028c42),
  (0x64, 0xbfd59be7),
  (0x68, 0x9986cbd3),
  (0x6c, 0x5f6dfe0d),
  (0x70, 0xf529e53b),
  (0x74, 0xf852de7c),
  (0x78, 0xd03cf9f2),
  (0x7c, 0xaf515013),
  (0xf0, 0x0000004b),
  (0x00, 0x2f3d25fa),
  (0x04, 0xfbc6275b),
  (0x08, 0xda86416d),
  (0x0c, 0x00000000),
  (0x10, 0x00000000),
  (0x14, 0x00000000),
  (0x18, 0x7d5168f9),
  (0x1c, 0x59827b1e),
  (0x20, 0xcad7bdae),
  (0x24, 0x912e00ff),
  (0x28, 0x7708c487),
  (0x2c, 0x9c9a7a2b),
  (0x30, 0xa8310b44),
  (0x34, 0x00000000),
  (0x38, 0x23917e36),
  (0x3c, 0x86a0bbbd),
  (0x40, 0xab3d3996),
  (0x44, 0x8df00db1),
  (0x48, 0x048b19d2),
  (0x4c, 0x919c2b4a),
  (0x50, 0x00000000),
  (0x54, 0xf55ddb8f),
  (0x58, 0x8baf8fb9),
  (0x5c, 0x314ac035),
  (0x60, 0x40c6c6f3),
  (0x64, 0x9b05b51f),
  (0x68, 0x996e3a4c),
  (0x6c, 0x9ad53ebf),
  (0x70, 0x9d5ac7fe),
  (0x74, 0x7109c0ac),
  (0x78, 0x6a90e062),
  (0x7c, 0xa50ffeac),
  (0xf0, 0x0000004c),
  (0x00, 0x01902be1),
  (0x04, 0x996d3b77),
  (0x08, 0xfe7b4ab6),
  (0x0c, 0x00000000),
  (0x10, 0x00000000),
  (0x14, 0x247d700b),
  (0x18, 0xc5f6f395),
  (0x1c, 0x6b0f94b7),
  (0x20, 0xaabe371b),
  (0x24, 0xe7f14795),
  (0x28, 0x2f738294),
  (0x2c, 0xbb048d84),
  (0x30, 0x7c37031e),
  (0x34, 0x16c52bb4),
  (0x38, 0xc5cdbfcd),
  (0x3c, 0x34b0fc37),
  (0x40, 0x4df73c2c),
  (0x44, 0xe42fcbb5),
  (0x48, 0xb675c639),
  (0x4c, 0x00000000),
  (0x50, 0x291b75e1),
  (0x54, 0xb349b072),
  (0x58, 0x2db1e8f1),
  (0x5c, 0x0557d466),
  (0x60, 0x04b61aeb),
  (0x64, 0x3a883ade),
  (0x68, 0x87af62d7),
  (0x6c, 0x1543528d),
  (0x70, 0x9d4b6d84),
  (0x74, 0xef892ad9),
  (0x78, 0x00000000),
  (0x7c, 0x169ca4e4),
  (0xf0, 0x0000004d),
  (0x00, 0xc20cd964),
  (0x04, 0x7d2ecb74),
  (0x08, 0x2c4333d4),
  (0x0c, 0x00000000),
  (0x10, 0xffffffff),
  (0x14, 0x3a3684b6),
  (0x18, 0xbea60d26),
  (0x1c, 0x9f5ca647),
  (0x20, 0x791c322d),
  (0x24, 0x14645da1),
  (0x28, 0x65d67b69),
  (0x2c, 0xfddac8b4),
  (0x30, 0x3d4f4092),
  (0x34, 0x7ef02dbc),
  (0x38, 0x13b593ff),
  (0x3c, 0x988e405a),
  (0x40, 0x00000000),
  (0x44, 0xed223e99),
  (0x48, 0xf4d837c1),
  (0x4c, 0xb62db4f1),
  (0x50, 0x00000000),
  (0x54, 0xe8774092),
  (0x58, 0x00000000),
  (0x5c, 0x00000000),
  (0x60, 0x072a601c),
  (0x64, 0x00000000),
  (0x68, 0x00000000),
  (0x6c, 0x6bc6e133),
  (0x70, 0x4bfb82a3),
  (0x74, 0x4e5011f4),
  (0x78, 0xc1b84fa3),
  (0x7c, 0xc1c53b25),
  (0xf0, 0x0000004e),
  (0x00, 0xb294a6d5),
  (0x04, 0xef8cabb2),
  (0x08, 0x25a00f2f),
  (0x0c, 0xacfa5cad),
  (0x10, 0x0a9e6c5a),
  (0x14, 0x00000000),
  (0x18, 0xd3db6633),
  (0x1c, 0xffffffff),
  (0x20, 0xbfc55247),
  (0x24, 0xa43aa8a1),
  (0x28, 0xd4f0f6f6),
  (0x2c, 0x8fe42fc1),
  (0x30, 0x499d532f),
  (0x34, 0x9ce098b3),
  (0x38, 0x00000000),
  (0x3c, 0x26e70c3c),
  (0x40, 0x2b7d1e0c),
  (0x44, 0x9f279012),
  (0x48, 0x00000000),
  (0x4c, 0x066165a4),
  (0x50, 0x706be90e),
  (0x54, 0xa40fdacb),
  (0x58, 0x00000000),
  (0x5c, 0x67ac26b4),
  (0x60, 0x8c203629),
  (0x64, 0xd64f383b),
  (0x68, 0x1840537f),
  (0x6c, 0x00000000),
  (0x70, 0x6f8fadb2),
  (0x74, 0xdd0db56e),
  (0x78, 0x1fa8577e),
  (0x7c, 0xbdb4267d),
  (0xf0, 0x0000004f),
  (0x00, 0x00000000),
  (0x04, 0x00000000),
  (0x08, 0xa1f6b502),
  (0x0c, 0x9d8f1b89),
  (0x10, 0xa13e9a36),
  (0x14, 0x3d74024a),
  (0x18, 0x1a9e8654),
  (0x1c, 0x80d80cbe),
  (0x20, 0xa8be0f39),
  (0x24, 0x427a6935),
  (0x28, 0xe4c51dfb),
  (0x2c, 0xa8319686),
  (0x30, 0xc6c26536),
  (0x34, 0xc6f8e084),
  (0x38, 0x00000000),
  (0x3c, 0x836a8c5b),
  (0x40, 0x8ed1204b),
  (0x44, 0xf1dab1c7),
  (0x48, 0x5ba244f6),
  (0x4c, 0x00000000),
  (0x50, 0x00000000),
  (0x54, 0x44890a7f),
  (0x58, 0xdd1dcb1c),
  (0x5c, 0xebb15d43),
  (0x60, 0xc332f4af),
  (0x64, 0x294c15fc),
  (0x68, 0xd58bc0a5),
  (0x6c, 0x1e79fb2a),
  (0x70, 0x0289df24),
  (0x74, 0x14c531d2),
  (0x78, 0xed1a3d0d),
  (0x7c, 0x00000000),
  (0xf0, 0x00000050),
  (0x00, 0x149a8214),
  (0x04, 0x00000000),
  (0x08, 0x1c534e41),
  (0x0c, 0xc6f1c50c),
  (0x10, 0x34577ea4),
  (0x14, 0xabf1ffc5),
  (0x18, 0x152bade1),
  (0x1c, 0x726008ea),
  (0x20, 0x1cd35bd4),
  (0x24, 0x00000000),
  (0x28, 0xec2a160a),
  (0x2c, 0x738b2e9f),
  (0x30, 0xdd4073d3),
  (0x34, 0xb475338e),
  (0x38, 0x529bab0c),
  (0x3c, 0xd8bd26d1),
  (0x40, 0xf08024a2),
  (0x44, 0x00000000),
  (0x48, 0x73b30779),
  (0x4c, 0x78d9f437),
  (0x50, 0x00000000),
  (0x54, 0x506b7f25),
  (0x58, 0xce77dca2),
  (0x5c, 0xffffffff),
  (0x60, 0xe2bedb19),
  (0x64, 0x02611917),
  (0x68, 0x093edf76),
  (0x6c, 0x88deb5de),
  (0x70, 0x92ce076c),
  (0x74, 0x165661dd),
  (0x78, 0x97d8318b),
  (0x7c, 0xacca369f),
  (0xf0, 0x00000051),
  (0x00, 0xa92dd1f3),
  (0x04, 0x7164b73a),
  (0x08, 0x17f31b9b),
  (0x0c, 0xe4887abb),
  (0x10, 0x903285d4),
  (0x14, 0x00000000),
  (0x18, 0x25a8b74b),
  (0x1c, 0xffffffff),
  (0x20, 0x7822beef),
  (0x24, 0x00000000),
  (0x28, 0xb3f8d0ea),
  (0x2c, 0x00000000),
  (0x30, 0x8a756127),
  (0x34, 0xec63d3ef),
  (0x38, 0x00000000),
  (0x3c, 0x50e65086),
  (0x40, 0xc42d625d),
  (0x44, 0x64b83bae),
  (0x48, 0x00000000),
  (0x4c, 0xc9a50e86),
  (0x50, 0x66caad3c),
  (0x54, 0x5ecba5ca),
  (0x58, 0x642cee93),
  (0x5c, 0xc620bfec),
  (0x60, 0xea77b742),
  (0x64, 0x8f60d8ad),
  (0x68, 0x1ad36077),
  (0x6c, 0xad6ad839),
  (0x70, 0x3bdde2ef),
  (0x74, 0x778864cf),
  (0x78, 0x192691a7),
  (0x7c, 0xa95091ee),
  (0xf0, 0x00000052),
  (0x00, 0x00000000),
  (0x04, 0x82d32d2b),
  (0x08, 0x00000000),
  (0x0c, 0xb05d26a1),
  (0x10, 0xffffffff),
  (0x14, 0x63af0935),
  (0x18, 0xd3b4e651),
  (0x1c, 0xa0a2dc2e),
  (0x20, 0x9fcb561d),
  (0x24, 0x54191fb9),
  (0x28, 0x8a2e8d8e),
  (0x2c, 0x28736861),
  (0x30, 0xea92311e),
  (0x34, 0x3a854f86),
  (0x38, 0xfdcd01bc),
  (0x3c, 0xe2af4761),
  (0x40, 0x00000000),
  (0x44, 0x4b884793),
  (0x48, 0x2c3ac3ee),
  (0x4c, 0xfca0006d),
  (0x50, 0x6916195b),
  (0x54, 0xed98a4e5),
  (0x58, 0xd98b7487),
  (0x5c, 0x54622e4a),
  (0x60, 0x24c7b57f),
  (0x64, 0x9f6fb52b),
  (0x68, 0x5096d80e),
  (0x6c, 0xf97ce565),
  (0x70, 0xdfde862d),
  (0x74, 0x00000000),
  (0x78, 0xd7a94a65),
  (0x7c, 0x225737f7),
  (0xf0, 0x00000053),
  (0x00, 0x519f01c3),
  (0x04, 0x00000000),
  (0x08, 0x42695821),
  (0x0c, 0x44c4de77),
  (0x10, 0x3e406fb2),
  (0x14, 0x4570fb49),
  (0x18, 0x19273ee5),
  (0x1c, 0x00000000),
  (0x20, 0xa1435132),
  (0x24, 0x00000000),
  (0x28, 0xb02aac8d),
  (0x2c, 0x00000000),
  (0x30, 0x4f84199f),
  (0x34, 0x5a446744),
  (0x38, 0x033d0e52),
  (0x3c, 0xfc14fa09),
  (0x40, 0x09e89fc3),
  (0x44, 0x580eabab),
  (0x48, 0x220a2fd6),
  (0x4c, 0x99eb59ee),
  (0x50, 0xa80af025),
  (0x54, 0x37cb4f62),
  (0x58, 0x9ac32e51),
  (0x5c, 0x1e274b75),
  (0x60, 0x1e7b8af1),
  (0x64, 0x8b963103),
  (0x68, 0x00000000),
  (0x6c, 0xb69ccc89),
  (0x70, 0xceb29aef),
  (0x74, 0x00000000),
  (0x78, 0xcbbd31cd),
  (0x7c, 0xdd1046ef),
  (0xf0, 0x00000054),
  (0x00, 0x6c744d29),
  (0x04, 0x5ff2e7e1),
  (0x08, 0x62d60aa6),
  (0x0c, 0xd3d1f787),
  (0x10, 0x490d43f7),
  (0x14, 0xcf09ba8e),
  (0x18, 0xf358d2e2),
  (0x1c, 0x00000000),
  (0x20, 0x565dcd4a),
  (0x24, 0x00000000),
  (0x28, 0xfb4e470e),
  (0x2c, 0x465c45f9),
  (0x30, 0x00000000),
  (0x34, 0x66bf91d1),
  (0x38, 0x043a89f3),
  (0x3c, 0xf59cad51),
  (0x40, 0x66e1140a),
  (0x44, 0xc86eb17a),
  (0x48, 0xd67e351a),
  (0x4c, 0x0b72d3f4),
  (0x50, 0x70831532),
  (0x54, 0x00000000),
  (0x58, 0x3cd94245),
  (0x5c, 0x86ace9ad),
  (0x60, 0x68b1c841),
  (0x64, 0x6681d33d),
  (0x68, 0xc02df48e),
  (0x6c, 0x00000000),
  (0x70, 0xe7e93833),
  (0x74, 0xdd0830c4),
  (0x78, 0xb90b74cc),
  (0x7c, 0x25c17fa5),
  (0xf0, 0x00000055),
  (0x00, 0x4c8e8d5f),
  (0x04, 0x39815a6d),
  (0x08, 0x4b52926b),
  (0x0c, 0x3ae02264),
  (0x10, 0xeb3b1b72),
  (0x14, 0x00000000),
  (0x18, 0xd3c696a6),
  (0x1c, 0x235893cf),
  (0x20, 0x150c00bf),
  (0x24, 0x366eec72),
  (0x28, 0x97fbe9c2),
  (0x2c, 0xb2b848c3),
  (0x30, 0xcfaed773),
  (0x34, 0xbd5707b3),
  (0x38, 0xe9886503),
  (0x3c, 0x40268577),
  (0x40, 0x818d8b53),
  (0x44, 0x00000000),
  (0x48, 0xc14e939e),
  (0x4c, 0x00000000),
  (0x50, 0x4d1e7c8b),
  (0x54, 0xd364e44c),
  (0x58, 0xb24534fa),
  (0x5c, 0x8f95ac77),
  (0x60, 0x79717e3a),
  (0x64, 0x8074b941),
  (0x68, 0xfccecf0f),
  (0x6c, 0x00000000),
  (0x70, 0xb26304b5),
  (0x74, 0x8c4c742f),
  (0x78, 0x5bfb3c2b),
  (0x7c, 0xb3b60094),
  (0xf0, 0x00000056),
  (0x00, 0x07339186),
  (0x04, 0xd56e0be7),
  (0x08, 0x964edc2e),
  (0x0c, 0xf4ac63ab),
  (0x10, 0x63fec727),
  (0x14, 0xd8552fea),
  (0x18, 0xc8a276fe),
  (0x1c, 0x00000000),
  (0x20, 0x2f10e25d),
  (0x24, 0x00000000),
  (0x28, 0xcd4f7d57),
  (0x2c, 0x7e540885),
  (0x30, 0x17de33c7),
  (0x34, 0xe571d994),
  (0x38, 0x1625e015),
  (0x3c, 0xeec5b5c6),
  (0x40, 0x00000000),
  (0x44, 0xfa2c44fc),
  (0x48, 0x24cc4905),
  (0x4c, 0x107b4193),
  (0x50, 0x716aab57),
  (0x54, 0xa40b73b7),
  (0x58, 0x85c327a9),
  (0x5c, 0xc7f89172),
  (0x60, 0x6f01c8b9),
  (0x64, 0x94ceb5f2),
  (0x68, 0x0c6a4d8a),
  (0x6c, 0xfebec387),
  (0x70, 0x00000000),
  (0x74, 0xa81e64ea),
  (0x78, 0xf4e1c3cb),
  (0x7c, 0x5f807567),
  (0xf0, 0x00000057),
  (0x00, 0x74bb03d1),
  (0x04, 0x8ce41f91),
  (0x08, 0xedd13b5a),
  (0x0c, 0x9df9dee7),
  (0x10, 0x6288d355),
  (0x14, 0x64ababa4),
  (0x18, 0x2a3b4a2b),
  (0x1c, 0x2cbf7914),
  (0x20, 0xb02e839a),
  (0x24, 0x6be38534),
  (0x28, 0x73e41a56),
  (0x2c, 0xe57ae221),
  (0x30, 0x9eed497e),
  (0x34, 0xcf90c17f),
  (0x38, 0x00000000),
  (0x3c, 0x93cf8341),
  (0x40, 0xffffffff),
  (0x44, 0x46b539d5),
  (0x48, 0xd072cb52),
  (0x4c, 0xaa01341e),
  (0x50, 0x1cd4f9bf),
  (0x54, 0xff88518e),
  (0x58, 0x42848112),
  (0x5c, 0x8673a061),
  (0x60, 0xbd80d29e),
  (0x64, 0x5dbb6f97),
  (0x68, 0x397b61d3),
  (0x6c, 0xfd644513),
  (0x70, 0x00000000),
  (0x74, 0x5640f4cd),
  (0x78, 0x53f76481),
  (0x7c, 0x53847d72),
  (0xf0, 0x00000058),
  (0x00, 0x59603f87),
  (0x04, 0x8c8ee92f),
  (0x08, 0x64cf1eba),
  (0x0c, 0x641bbbf6),
  (0x10, 0x7fcb3ac4),
  (0x14, 0x0ae5672d),
  (0x18, 0x6612118d),
  (0x1c, 0xa057d01c),
  (0x20, 0x10dbdbf6),
  (0x24, 0x1f00eaa4),
  (0x28, 0x48d91a4e),
  (0x2c, 0x198d1f46),
  (0x30, 0xf6d5ccf4),
  (0x34, 0xa6260171),
  (0x38, 0xa70a5cd5),
  (0x3c, 0x7e81d93d),
  (0x40, 0xf16d262e),
  (0x44, 0xe0b153ba),
  (0x48, 0x9208adf9),
  (0x4c, 0x714e0a62),
  (0x50, 0xb0405e03),
  (0x54, 0xcb8c1ba3),
  (0x58, 0x57f3a43f),
  (0x5c, 0x4dfee525),
  (0x60, 0x00000000),
  (0x64, 0x7cd193ed),
  (0x68, 0x9b2e83db),
  (0x6c, 0x21ed0851),
  (0x70, 0x9c0a6c62),
  (0x74, 0xe14ed081),
  (0x78, 0x508348ee),
  (0x7c, 0x0a4c1001),
  (0xf0, 0x00000059),
  (0x00, 0x81c2f0c7),
  (0x04, 0x24959a6a),
  (0x08, 0x6ccaa146),
  (0x0c, 0x24addbd7),
  (0x10, 0x6539f3bc),
  (0x14, 0x32859d7b),
  (0x18, 0xa47d002e),
  (0x1c, 0x8b608052),
  (0x20, 0xf63b3107),
  (0x24, 0x9368b84a),
  (0x28, 0x0856f53a),
  (0x2c, 0x08ca1602),
  (0x30, 0x0b4413e7),
  (0x34, 0xae2e581b),
  (0x38, 0xc08c5b2d),
  (0x3c, 0xffffffff),
];

#[cfg(test)]
mod tests {
  use super::FIRMWARE;
  use crate::reg::Reg;

  #[test]
  fn image_starts_with_a_page_select() {
    assert_eq!(FIRMWARE[0].0, Reg::Page as u8);
  }

  #[test]
  fn every_entry_is_a_page_select_or_an_aligned_offset() {
    for &(addr, _) in FIRMWARE {
      let page_select = addr == Reg::Page as u8;
      let aligned_offset = addr <= 0x7C && addr % 4 == 0;
      assert!(page_select || aligned_offset, "unexpected address {:#04x}", addr);
    }
  }

  #[test]
  fn offsets_restart_after_each_page_select() {
    let mut expected_offset = None;
    for &(addr, _) in FIRMWARE {
      if addr == Reg::Page as u8 {
        expected_offset = Some(0);
      } else {
        let offset = expected_offset.expect("offset write before the first page select");
        assert_eq!(addr, offset);
        expected_offset = Some(offset + 4);
      }
    }
  }
}
