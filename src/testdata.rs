pub(crate) const CACERT: &[u8] = br#"
-----BEGIN CERTIFICATE-----
MIIE/TCCAuWgAwIBAgIUC6P8lL7WcKXKasK4GDblgg2Yl8owDQYJKoZIhvcNAQEL
BQAwDTELMAkGA1UEAwwCQ0EwIBcNMjQwOTI5MTE0NjIyWhgPMjA3NDA5MjcxMTQ2
MjJaMA0xCzAJBgNVBAMMAkNBMIICIjANBgkqhkiG9w0BAQEFAAOCAg8AMIICCgKC
AgEAlGij3bX/EGzGncKyR2yQSBJjC8mpeRCSAsYsjajOaAm+3SUQ4ifNPTDRoDbU
AHbEIFa4l6h/9NapOZkRb7ctX2ELJzMa+IEpjP+U33i2tZV1m4r4LouphzzA4gkx
2voe+a3TOo73Ws0G7+hqQTpb+SQlao/TcQ16YSx65JVDjW/dPACb2bnxe1yDJOaM
DzRLtcSYlbiPyLfnF4RP6NXzNKBki4ShyEoKAjZvaIPJzjDNekJrTj5i/6xA7X2Q
w9aIDr11/Q5EfQ2pATfYJxCzhQbZBSB6qJdBVE+BAvoyCzvcCNQj/lUE+vFiNBPV
Rej6djFT539VG0YxsedInqLu8Eyth2aP4WyV4kHaBuHZIWu6TtDQnk/dZGE8zRDf
RwroMWKMxiJxJcHrB0kbgk3LY0FwiuWi+eDvkLjhwnIYz6udtf0HSrLuu7v+pV7I
+M4XrgsiLghngkYxUHDDtOZJ54qrnpyWXxh0WVoU3E7bI159U76k6wXlMt1oviwn
Yq+iPfPIhOppMdK4Jja3dKPwYnHmf7XJ0d7QBDu+FKmIwxHVyDY+uXR/KPizwPg+
pmA1GJIJa3bGE2SU4T9wRmrrw0tNQsKbBoRFMncXVJF8tAeG82w2/ECLg/lwvibP
XUnSjf+Hwmd0Wooz5wc5meI4iGh6lbV2WgFJ3wjWK1+yltcCAwEAAaNTMFEwHQYD
VR0OBBYEFGqACHEmnMMYJoPvb7UriVBakToTMB8GA1UdIwQYMBaAFGqACHEmnMMY
JoPvb7UriVBakToTMA8GA1UdEwEB/wQFMAMBAf8wDQYJKoZIhvcNAQELBQADggIB
ACE2F7/Vp1wpp1hsGf342jo1qKsySyxcigWFkaZfDHJLInzF3bm/kcYBzYTELdP+
odoMbOmfbRUbl0DsmRHWP0PtbghtnUB+b2py8zGuqTezYIIXUjcUkqlEFbFo4tQg
+s2ximUpAwI3ClgrWvuj4tHHhhjXVQo424okkyZypUXHRNaKHo+yF5VAHf7msPyy
hQuTdUSNmhzWK6/JZpuyI7NbkiVgvt1y4ymqarAuE+bbcXo0j9L+aYUv9Eij4yJC
DJVfzsKvFIeA8bpc0PRgkNLztrcBIeQOKtMUPL6oCpEbfENsrVzkMhLksTCB4kwZ
U7OpEt0D/doVudBmmUCzYwmFyaCrAPTgZzImyIe6KIeAw5xNfbFYznibi1dtepXR
dGPbSpFfsindYuKmKx03ZMgTShzpB4gM10gHl63Jo6rGNfiHaCIyMhFoXUOK6QTD
335eIQ2CT98Pe9yF7GlbroomlyIQlSKfx0EYltjxXcDVruAgL9Yx/B5b2EeK3Vpi
2G2Nrcgme5dL91KTUQyaodLTVo59hXOIIfLk6rwLASQcH+aAbjNW8ckVjLou98LX
H8nAfcEW7oPp5rv5nshDfj29ffEkGT/CLoScnKCwqA/lRjud/j3NHw89MTAk3puZ
I6snlcxZJk6CVv/lGNUJRQKgncKXgvkaVo2enAKoE6l7
-----END CERTIFICATE-----
"#;

// Well-formed PEM whose payload is not DER, to exercise the
// skipped-entry path in bundle loading.
pub(crate) const NOT_A_CERT: &[u8] = br#"
-----BEGIN CERTIFICATE-----
AAAA
-----END CERTIFICATE-----
"#;
